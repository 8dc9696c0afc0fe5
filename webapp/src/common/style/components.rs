pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container-custom {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section-padding {
  padding: var(--space-24) 0;
}

.section-intro {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-intro p {
  color: var(--role-text-muted);
  max-width: 42rem;
  margin: var(--space-4) auto 0;
}

.surface-muted {
  background-color: var(--role-muted);
}

.surface-dark {
  background-color: var(--role-ink);
  color: var(--role-text-inverse);
}

.surface-dark .section-intro p {
  color: var(--color-gray-300, rgba(255, 255, 255, 0.7));
}

/* Reveal on scroll */
.reveal {
  opacity: 0;
}

.reveal.is-visible {
  opacity: 1;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
  text-decoration: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--role-accent);
  color: var(--role-text-inverse);
}

.btn-primary:hover {
  filter: brightness(0.92);
}

.btn-outline {
  background-color: transparent;
  color: var(--role-text-inverse);
  border-color: rgba(255, 255, 255, 0.3);
}

.btn-outline:hover {
  background-color: rgba(255, 255, 255, 0.1);
}

.btn-block {
  width: 100%;
}

/* Pills (filter buttons, swatches) */
.pill {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: none;
  cursor: pointer;
  background-color: var(--role-surface);
  color: var(--role-text);
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.pill:hover {
  background-color: var(--role-muted);
}

.pill.active {
  background-color: var(--role-accent);
  color: var(--role-text-inverse);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-6);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--role-text);
}

.form-input,
.form-textarea,
.form-select {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--role-muted);
  border-radius: var(--radius-md);
  background-color: var(--role-surface);
  color: var(--role-text);
  font: inherit;
}

.form-input:focus,
.form-textarea:focus,
.form-select:focus {
  border-color: var(--role-accent);
  box-shadow: 0 0 0 2px var(--role-accent);
  outline: none;
}

.icon {
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}

.icon-lg {
  width: 24px;
  height: 24px;
}

.icon-badge {
  display: inline-flex;
  padding: var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--role-accent);
  color: var(--role-text-inverse);
}

.error-panel {
  max-width: 40rem;
  margin: var(--space-24) auto;
  padding: var(--space-8);
  border: 1px solid #EF4444;
  border-radius: var(--radius-lg);
  font-family: monospace;
  white-space: pre-wrap;
}
"#;

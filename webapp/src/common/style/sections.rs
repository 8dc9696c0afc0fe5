pub const SECTION_STYLES: &str = r#"
/* Header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  transition: all var(--transition-normal) var(--easing-standard);
}

.site-header.transparent {
  background-color: transparent;
  padding: var(--space-6) 0;
  color: var(--role-text-inverse);
}

.site-header.solid {
  background-color: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-md);
  padding: var(--space-4) 0;
  color: var(--role-text);
}

.header-bar {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: inherit;
}

.brand strong {
  font-weight: 500;
}

.header-links {
  display: flex;
  gap: var(--space-8);
  list-style: none;
}

.header-links a,
.footer-links a {
  color: inherit;
  transition: color var(--transition-fast);
}

.header-links a:hover,
.footer-links a:hover {
  color: var(--role-accent);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
}

.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--role-ink);
}

.mobile-menu ul {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  list-style: none;
  text-align: center;
}

.mobile-menu a {
  color: var(--role-text-inverse);
  font-size: 1.5rem;
}

@media (max-width: 767px) {
  .header-links { display: none; }
  .menu-toggle { display: block; }
}

/* Hero */
.hero {
  position: relative;
  height: 100vh;
  width: 100%;
  overflow: hidden;
}

.hero-backdrop img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero-backdrop::after {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.4));
}

.hero-body {
  position: relative;
  z-index: 10;
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: flex-start;
}

.hero-body h1 {
  color: var(--role-text-inverse);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  line-height: 1.1;
  max-width: 48rem;
  margin-bottom: var(--space-4);
}

.hero-body p {
  color: rgba(255, 255, 255, 0.85);
  font-size: 1.25rem;
  max-width: 42rem;
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

.scroll-cue {
  position: absolute;
  bottom: var(--space-10);
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
  z-index: 10;
}

.scroll-cue a {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  color: var(--role-text-inverse);
  font-size: 0.875rem;
}

.scroll-cue span.line {
  width: 2px;
  height: 32px;
  background-color: rgba(255, 255, 255, 0.5);
}

/* Filterable grids */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  list-style: none;
  margin-bottom: var(--space-10);
}

.filter-stage {
  min-height: 600px;
  animation: fadeIn var(--transition-filter) ease-in-out;
}

.filter-stage.transitioning .masonry-tile,
.filter-stage.transitioning .product-card {
  will-change: opacity, transform;
}

.masonry {
  column-count: 3;
  column-gap: var(--space-4);
}

@media (max-width: 1100px) { .masonry { column-count: 2; } }
@media (max-width: 700px) { .masonry { column-count: 1; } }

.masonry-tile {
  position: relative;
  break-inside: avoid;
  margin-bottom: var(--space-4);
  overflow: hidden;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  animation: slideUp var(--transition-filter) ease-out;
}

.masonry-tile img {
  display: block;
  width: 100%;
  aspect-ratio: 3 / 4;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.masonry-tile:hover img {
  transform: scale(1.03);
}

.tile-caption {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: var(--space-6);
  opacity: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
  transition: opacity var(--transition-normal);
}

.masonry-tile:hover .tile-caption {
  opacity: 1;
}

.tile-caption h3 {
  color: var(--role-text-inverse);
  font-size: 1.25rem;
  font-weight: 500;
}

.tile-caption p {
  color: rgba(255, 255, 255, 0.8);
  font-size: 0.875rem;
}

.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-8);
}

.product-card {
  position: relative;
  background-color: var(--role-surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-product, var(--shadow-lg));
  overflow: hidden;
  animation: slideUp var(--transition-filter) ease-out;
}

.product-card img {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  background-color: var(--role-muted);
}

.product-badge {
  position: absolute;
  top: var(--space-4);
  left: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--role-accent);
  color: var(--role-text-inverse);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.product-body {
  padding: var(--space-6);
}

.product-head {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
}

.product-colorway {
  color: var(--role-text-muted);
  font-size: 0.875rem;
  margin: var(--space-1) 0 var(--space-4);
}

.swatches {
  display: flex;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.swatch {
  width: 24px;
  height: 24px;
  border-radius: var(--radius-full);
  border: 2px solid var(--role-muted);
  cursor: pointer;
}

.swatch.active {
  outline: 2px solid var(--role-accent);
  outline-offset: 2px;
}

/* About */
.split {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
}

@media (max-width: 767px) { .split { grid-template-columns: 1fr; } }

.framed {
  position: relative;
}

.framed img {
  width: 100%;
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
}

.framed::before,
.framed::after {
  content: "";
  position: absolute;
  width: 96px;
  height: 96px;
  border-color: var(--role-accent);
  border-style: solid;
}

.framed::before { top: -16px; left: -16px; border-width: 2px 0 0 2px; }
.framed::after { bottom: -16px; right: -16px; border-width: 0 2px 2px 0; }

.about-copy p {
  color: var(--role-text-muted);
  margin-bottom: var(--space-4);
}

.bullet-lists {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
  margin: var(--space-6) 0 var(--space-8);
}

.bullet-lists h4 {
  font-family: var(--font-display);
  font-size: 1.25rem;
  margin-bottom: var(--space-2);
}

.bullet-lists li {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  list-style: none;
  margin-bottom: var(--space-2);
  color: var(--role-text-muted);
}

.bullet-lists li::before {
  content: "";
  width: 6px;
  height: 6px;
  border-radius: var(--radius-full);
  background-color: var(--role-accent);
}

/* Card grids */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-8);
}

.icon-card {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--role-surface);
  transition: background-color var(--transition-normal);
}

.surface-dark .icon-card {
  background-color: var(--role-raised);
}

.icon-card .card-icon {
  color: var(--role-accent);
  margin-bottom: var(--space-4);
}

.icon-card h3 {
  font-size: 1.25rem;
  margin-bottom: var(--space-3);
}

.icon-card p {
  color: var(--role-text-muted);
}

.surface-dark .icon-card p {
  color: rgba(255, 255, 255, 0.6);
}

.card-grid-closing {
  text-align: center;
  margin-top: var(--space-16);
}

.card-grid-closing p {
  margin-bottom: var(--space-8);
}

.value-strip .icon-card {
  display: flex;
  gap: var(--space-4);
  align-items: flex-start;
  background-color: transparent;
}

/* Limited edition */
.limited-eyebrow {
  color: var(--role-accent);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.875rem;
}

.limited-price {
  font-size: 2rem;
  font-weight: 600;
  margin: var(--space-4) 0;
}

.countdown {
  display: flex;
  gap: var(--space-4);
  margin: var(--space-6) 0 var(--space-8);
}

.countdown-cell {
  min-width: 72px;
  padding: var(--space-3);
  text-align: center;
  border-radius: var(--radius-lg);
  background-color: var(--role-raised);
}

.countdown-value {
  display: block;
  font-size: 2rem;
  font-weight: 700;
  font-variant-numeric: tabular-nums;
}

.countdown-label {
  font-size: 0.75rem;
  text-transform: uppercase;
  opacity: 0.7;
}

/* Testimonials */
.testimonial-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-8);
}

.testimonial-card {
  position: relative;
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: var(--role-surface);
  box-shadow: var(--shadow-lg);
}

.testimonial-card::before {
  content: "\201C";
  position: absolute;
  top: -16px;
  left: -8px;
  font-family: var(--font-display);
  font-size: 3rem;
  color: var(--role-accent);
  opacity: 0.3;
}

.testimonial-person {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.testimonial-person img {
  width: 64px;
  height: 64px;
  border-radius: var(--radius-full);
  object-fit: cover;
}

.testimonial-person p {
  color: var(--role-text-muted);
  font-size: 0.875rem;
}

.stars {
  display: flex;
  color: #EAB308;
  margin-bottom: var(--space-4);
}

.stars svg {
  fill: currentColor;
}

.testimonial-quote {
  font-style: italic;
  color: var(--role-text-muted);
}

.carousel-controls {
  display: none;
  justify-content: center;
  align-items: center;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.carousel-dot {
  width: 10px;
  height: 10px;
  border-radius: var(--radius-full);
  border: none;
  background-color: var(--role-text-muted);
  opacity: 0.4;
  cursor: pointer;
}

.carousel-dot.active {
  background-color: var(--role-accent);
  opacity: 1;
}

@media (max-width: 767px) {
  .testimonial-card.inactive { display: none; }
  .carousel-controls { display: flex; }
}

/* Contact / newsletter */
.contact-info {
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: var(--role-muted);
}

.contact-info h3 {
  font-family: var(--font-display);
  font-size: 1.5rem;
  margin-bottom: var(--space-6);
}

.contact-line {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.contact-line p {
  color: var(--role-text-muted);
}

.social-row {
  display: flex;
  gap: var(--space-4);
}

.social-row a {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--role-surface);
  color: var(--role-text);
}

.social-row a:hover {
  color: var(--role-accent);
}

.newsletter-form {
  display: flex;
  gap: var(--space-2);
  max-width: 32rem;
  margin: 0 auto;
}

.newsletter-fine-print {
  text-align: center;
  margin-top: var(--space-4);
  font-size: 0.875rem;
  color: var(--role-text-muted);
}

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  background-color: var(--role-ink);
  color: var(--role-text-inverse);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-8);
}

@media (max-width: 767px) { .footer-grid { grid-template-columns: 1fr 1fr; } }

.site-footer h3,
.site-footer h4 {
  font-family: var(--font-display);
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
  color: rgba(255, 255, 255, 0.6);
}

.footer-links li {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-2);
}

.footer-links .icon {
  color: var(--role-accent);
}

.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: var(--space-4);
  margin-top: var(--space-8);
  padding-top: var(--space-8);
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.5);
}

.footer-bottom .social-row a {
  background-color: transparent;
  color: inherit;
  padding: 0;
}
"#;

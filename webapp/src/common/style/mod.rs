use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// static stylesheet shared by every site; the token stylesheet generated from the site's
// content document is injected next to it
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans, system-ui, sans-serif);
  color: var(--role-text);
  background-color: var(--role-surface);
  line-height: 1.6;
}

h1, h2, h3 {
  font-family: var(--font-display, serif);
  font-weight: 500;
}

h2 {
  font-size: clamp(2rem, 4vw, 3rem);
}

a {
  color: var(--role-accent);
  text-decoration: none;
}

img {
  max-width: 100%;
}

.page {
  overflow-x: hidden;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES
);

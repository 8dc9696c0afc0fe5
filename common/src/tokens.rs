use std::{
    collections::BTreeMap,
    fmt::{self, Write},
};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

// semantic color roles every site must map onto its palette
pub const REQUIRED_ROLES: [&str; 8] = [
    "ink",
    "accent",
    "surface",
    "muted",
    "raised",
    "text",
    "text-muted",
    "text-inverse",
];

// keyframes the static stylesheet animates with directly
pub const REQUIRED_KEYFRAMES: [&str; 2] = ["fadeIn", "slideUp"];

// `.animate-*` classes the section components put on their elements
pub const REQUIRED_ANIMATIONS: [&str; 4] = ["fade-in", "fade-in-slow", "slide-up", "slide-left"];

// keyframe step, e.g. at = "0%", style = "opacity: 0;"
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Keyframe {
    pub at: String,
    pub style: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Animation {
    pub keyframes: String,
    pub duration: String,
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(default = "default_fill")]
    pub fill: String,
}

fn default_easing() -> String {
    String::from("ease-in-out")
}

fn default_fill() -> String {
    String::from("forwards")
}

// design tokens
//
// static configuration rendered into css custom properties and keyframes.  the palette is a
// two-level table (scale -> shade -> color) and roles point into it with "scale.shade"
// references, so the section stylesheet only ever talks about roles
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct DesignTokens {
    #[serde(default)]
    pub fonts: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub palette: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub roles: BTreeMap<String, String>,
    #[serde(default)]
    pub spacing: BTreeMap<String, String>,
    #[serde(default)]
    pub shadows: BTreeMap<String, String>,
    #[serde(default)]
    pub keyframes: BTreeMap<String, Vec<Keyframe>>,
    #[serde(default)]
    pub animations: BTreeMap<String, Animation>,
}

impl DesignTokens {
    // "scale.shade" -> color
    pub fn resolve(&self, reference: &str) -> Option<&str> {
        let (scale, shade) = reference.split_once('.')?;
        self.palette.get(scale)?.get(shade).map(String::as_str)
    }

    pub fn validate(&self) -> Result<()> {
        for role in REQUIRED_ROLES {
            if !self.roles.contains_key(role) {
                bail!("design tokens are missing the '{role}' color role");
            }
        }

        for name in REQUIRED_KEYFRAMES {
            if !self.keyframes.contains_key(name) {
                bail!("design tokens are missing the '{name}' keyframes");
            }
        }

        for name in REQUIRED_ANIMATIONS {
            if !self.animations.contains_key(name) {
                bail!("design tokens are missing the '{name}' animation");
            }
        }

        for (role, reference) in self.roles.iter() {
            if self.resolve(reference).is_none() {
                bail!("color role '{role}' points at unknown palette entry '{reference}'");
            }
        }

        for (name, animation) in self.animations.iter() {
            if !self.keyframes.contains_key(&animation.keyframes) {
                bail!(
                    "animation '{name}' uses undefined keyframes '{}'",
                    animation.keyframes
                );
            }
        }

        Ok(())
    }

    // the full token stylesheet: :root variables, keyframes, and one .animate-* class per animation
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        // writing into a String cannot fail
        self.write_css(&mut css).map(|()| css).unwrap_or_default()
    }

    fn write_css(&self, css: &mut String) -> fmt::Result {
        writeln!(css, ":root {{")?;

        for (scale, shades) in self.palette.iter() {
            for (shade, color) in shades.iter() {
                writeln!(css, "  --color-{scale}-{shade}: {color};")?;
            }
        }

        for (role, reference) in self.roles.iter() {
            let (scale, shade) = reference.split_once('.').unwrap_or((reference.as_str(), ""));
            writeln!(css, "  --role-{role}: var(--color-{scale}-{shade});")?;
        }

        for (name, families) in self.fonts.iter() {
            let stack: Vec<String> = families.iter().map(|f| font_family(f)).collect();
            writeln!(css, "  --font-{name}: {};", stack.join(", "))?;
        }

        for (name, size) in self.spacing.iter() {
            writeln!(css, "  --space-{name}: {size};")?;
        }

        for (name, shadow) in self.shadows.iter() {
            writeln!(css, "  --shadow-{name}: {shadow};")?;
        }

        writeln!(css, "}}")?;

        for (name, frames) in self.keyframes.iter() {
            writeln!(css, "@keyframes {name} {{")?;
            for frame in frames.iter() {
                writeln!(css, "  {} {{ {} }}", frame.at, frame.style)?;
            }
            writeln!(css, "}}")?;
        }

        for (name, animation) in self.animations.iter() {
            writeln!(
                css,
                ".animate-{name} {{ animation: {} {} {} {}; }}",
                animation.keyframes, animation.duration, animation.easing, animation.fill
            )?;
        }

        Ok(())
    }
}

// classes for a block that animates in once it has been scrolled into view
//
// the `.animate-*` class is only attached once the block is visible, otherwise the entrance
// would play on page load while the block is still off screen
pub fn reveal_class(base: &str, animation: &str, visible: bool) -> String {
    let mut class = String::from(base.trim());
    if !class.is_empty() {
        class.push(' ');
    }
    class.push_str("reveal");

    if visible {
        class.push_str(" is-visible animate-");
        class.push_str(animation);
    }

    class
}

// generic families stay bare, named ones get quoted
fn font_family(name: &str) -> String {
    const GENERIC: [&str; 6] = [
        "serif",
        "sans-serif",
        "monospace",
        "cursive",
        "system-ui",
        "-apple-system",
    ];

    if GENERIC.contains(&name) {
        name.to_owned()
    } else {
        format!("'{name}'")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens() -> DesignTokens {
        let mut tokens = DesignTokens::default();

        tokens.fonts.insert(
            String::from("display"),
            vec![String::from("Playfair Display"), String::from("serif")],
        );

        let mut luxury = BTreeMap::new();
        luxury.insert(String::from("50"), String::from("#FAFAFA"));
        luxury.insert(String::from("900"), String::from("#212121"));
        tokens.palette.insert(String::from("luxury"), luxury);

        let mut jordan = BTreeMap::new();
        jordan.insert(String::from("red"), String::from("#CE1141"));
        tokens.palette.insert(String::from("jordan"), jordan);

        for (role, reference) in [
            ("ink", "luxury.900"),
            ("accent", "jordan.red"),
            ("surface", "luxury.50"),
            ("muted", "luxury.50"),
            ("raised", "luxury.900"),
            ("text", "luxury.900"),
            ("text-muted", "luxury.900"),
            ("text-inverse", "luxury.50"),
        ] {
            tokens.roles.insert(role.to_owned(), reference.to_owned());
        }

        tokens.keyframes.insert(
            String::from("fadeIn"),
            vec![
                Keyframe {
                    at: String::from("0%"),
                    style: String::from("opacity: 0;"),
                },
                Keyframe {
                    at: String::from("100%"),
                    style: String::from("opacity: 1;"),
                },
            ],
        );
        tokens.keyframes.insert(
            String::from("slideUp"),
            vec![
                Keyframe {
                    at: String::from("0%"),
                    style: String::from("transform: translateY(20px); opacity: 0;"),
                },
                Keyframe {
                    at: String::from("100%"),
                    style: String::from("transform: translateY(0); opacity: 1;"),
                },
            ],
        );

        for (name, keyframes, duration) in [
            ("fade-in", "fadeIn", "1.2s"),
            ("fade-in-slow", "fadeIn", "2s"),
            ("slide-up", "slideUp", "0.8s"),
            ("slide-left", "slideUp", "0.8s"),
        ] {
            tokens.animations.insert(
                name.to_owned(),
                Animation {
                    keyframes: keyframes.to_owned(),
                    duration: duration.to_owned(),
                    easing: default_easing(),
                    fill: default_fill(),
                },
            );
        }

        tokens
    }

    #[test]
    fn resolves_palette_references() {
        let tokens = tokens();

        assert_eq!(tokens.resolve("jordan.red"), Some("#CE1141"));
        assert_eq!(tokens.resolve("jordan.blue"), None);
        assert_eq!(tokens.resolve("jordan"), None);
    }

    #[test]
    fn css_contains_every_palette_entry() {
        let tokens = tokens();
        let css = tokens.to_css();

        for (scale, shades) in tokens.palette.iter() {
            for (shade, color) in shades.iter() {
                assert!(css.contains(&format!("--color-{scale}-{shade}: {color};")));
            }
        }

        assert!(css.contains("--role-accent: var(--color-jordan-red);"));
        assert!(css.contains("--font-display: 'Playfair Display', serif;"));
        assert!(css.contains("@keyframes fadeIn {"));
        assert!(css.contains(".animate-fade-in { animation: fadeIn 1.2s ease-in-out forwards; }"));
    }

    #[test]
    fn validation_catches_dangling_references() {
        let mut tokens = tokens();
        assert!(tokens.validate().is_ok());

        tokens
            .roles
            .insert(String::from("accent"), String::from("jordan.gold"));
        assert!(tokens.validate().is_err());
    }

    #[test]
    fn validation_requires_every_role() {
        let mut tokens = tokens();
        tokens.roles.remove("muted");

        let err = tokens.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "design tokens are missing the 'muted' color role"
        );
    }

    #[test]
    fn animations_need_keyframes() {
        let mut tokens = tokens();
        tokens.keyframes.clear();

        assert!(tokens.validate().is_err());
    }

    #[test]
    fn stylesheet_animations_are_required() {
        let mut tokens = tokens();
        tokens.animations.remove("slide-left");

        let err = tokens.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "design tokens are missing the 'slide-left' animation"
        );
    }

    #[test]
    fn stylesheet_keyframes_are_required() {
        let mut tokens = tokens();
        tokens.keyframes.remove("slideUp");

        let err = tokens.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "design tokens are missing the 'slideUp' keyframes"
        );
    }

    #[test]
    fn css_is_one_root_block_then_keyframes() {
        let css = tokens().to_css();

        assert!(css.starts_with(":root {\n  --color-jordan-red: #CE1141;\n"));
        assert_eq!(css.matches("@keyframes").count(), 2);
        assert_eq!(css.matches(".animate-").count(), 4);
    }

    #[test]
    fn reveal_class_waits_for_visibility() {
        assert_eq!(reveal_class("framed", "slide-left", false), "framed reveal");
        assert_eq!(
            reveal_class("framed", "slide-left", true),
            "framed reveal is-visible animate-slide-left"
        );
        assert_eq!(reveal_class("", "slide-up", false), "reveal");
        assert_eq!(
            reveal_class("", "slide-up", true),
            "reveal is-visible animate-slide-up"
        );
    }
}

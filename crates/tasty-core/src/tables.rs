//! Static built-in name tables.
//!
//! Project configuration extends units and functions; the rest are fixed.

/// Units the style engine understands without configuration.
pub const BUILTIN_UNITS: &[&str] = &["x", "r", "cr", "bw", "ow", "fs", "lh", "sf"];

pub const CSS_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vw", "vh", "vmin", "vmax", "dvw", "dvh", "svw", "svh", "lvw", "lvh",
    "ch", "ex", "cap", "ic", "rlh", "fr", "deg", "rad", "grad", "turn", "s", "ms", "hz", "khz",
    "dpi", "dpcm", "dppx", "cm", "mm", "in", "pt", "pc", "q", "cqw", "cqh", "cqi", "cqb", "cqmin",
    "cqmax",
];

pub const PRESET_MODIFIERS: &[&str] = &[
    "bold",
    "italic",
    "strong",
    "tight",
    "icon",
    "uppercase",
    "lowercase",
    "capitalize",
];

pub const DIRECTIONS: &[&str] = &[
    "top",
    "right",
    "bottom",
    "left",
    "inline",
    "block",
    "inline-start",
    "inline-end",
    "block-start",
    "block-end",
];

/// Color token names valid in every project.
pub const RESERVED_COLOR_TOKENS: &[&str] = &["current", "transparent", "inherit"];

pub const CSS_GLOBAL_VALUES: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

pub const CSS_FUNCTIONS: &[&str] = &[
    "calc",
    "min",
    "max",
    "clamp",
    "var",
    "rgb",
    "rgba",
    "hsl",
    "hsla",
    "hwb",
    "lab",
    "lch",
    "oklab",
    "oklch",
    "color",
    "color-mix",
    "light-dark",
    "url",
    "linear-gradient",
    "radial-gradient",
    "conic-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "repeating-conic-gradient",
    "translate",
    "translateX",
    "translateY",
    "translate3d",
    "scale",
    "scaleX",
    "scaleY",
    "rotate",
    "skew",
    "matrix",
    "perspective",
    "blur",
    "brightness",
    "contrast",
    "drop-shadow",
    "grayscale",
    "hue-rotate",
    "invert",
    "opacity",
    "saturate",
    "sepia",
    "cubic-bezier",
    "steps",
    "repeat",
    "minmax",
    "fit-content",
    "env",
    "attr",
    "counter",
    "counters",
    "image-set",
    "element",
];

/// Functional pseudo-classes whose argument is a selector list.
pub const SELECTOR_PSEUDO_FUNCTIONS: &[&str] = &["has", "is", "where", "not"];

/// Keywords after `@` with their own grammar.
pub const AT_RULE_KEYWORDS: &[&str] = &[
    "media",
    "supports",
    "root",
    "own",
    "starting",
    "keyframes",
    "properties",
];

pub fn is_at_rule_keyword(name: &str) -> bool {
    AT_RULE_KEYWORDS.contains(&name)
}

pub fn is_builtin_unit(name: &str) -> bool {
    BUILTIN_UNITS.contains(&name)
}

pub fn is_css_unit(name: &str) -> bool {
    CSS_UNITS.contains(&name)
}

pub fn is_preset_modifier(name: &str) -> bool {
    PRESET_MODIFIERS.contains(&name)
}

pub fn is_direction(name: &str) -> bool {
    DIRECTIONS.contains(&name)
}

pub fn is_reserved_color_token(name: &str) -> bool {
    RESERVED_COLOR_TOKENS.contains(&name)
}

pub fn is_css_global_value(name: &str) -> bool {
    CSS_GLOBAL_VALUES.contains(&name)
}

pub fn is_css_function(name: &str) -> bool {
    CSS_FUNCTIONS.contains(&name)
}

pub fn is_selector_pseudo_function(name: &str) -> bool {
    SELECTOR_PSEUDO_FUNCTIONS.contains(&name)
}

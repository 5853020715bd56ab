//! Closed Bulma vocabularies accepted by the style-intent resolver.
//!
//! Each enum parses from exactly the words Bulma uses in its helper class names and renders back
//! to the same word through `token()`. Anything outside a vocabulary parses to `None`.

macro_rules! closed_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $token, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Vocabulary word used inside class names.
            pub fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Parses a vocabulary word. Unknown words yield `None`.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

closed_vocabulary! {
    /// Semantic and grayscale colors for `has-text-*` and `has-background-*`.
    pub enum Color {
        Primary => "primary",
        Link => "link",
        Info => "info",
        Success => "success",
        Warning => "warning",
        Danger => "danger",
        Black => "black",
        BlackBis => "black-bis",
        BlackTer => "black-ter",
        GreyDarker => "grey-darker",
        GreyDark => "grey-dark",
        Grey => "grey",
        GreyLight => "grey-light",
        GreyLighter => "grey-lighter",
        WhiteTer => "white-ter",
        WhiteBis => "white-bis",
        White => "white",
        Light => "light",
        Dark => "dark",
        Text => "text",
        Inherit => "inherit",
        Current => "current",
    }
}

closed_vocabulary! {
    /// Color shade suffixes: two-digit lightness steps and named variants.
    pub enum ColorShade {
        S00 => "00",
        S05 => "05",
        S10 => "10",
        S15 => "15",
        S20 => "20",
        S25 => "25",
        S30 => "30",
        S35 => "35",
        S40 => "40",
        S45 => "45",
        S50 => "50",
        S55 => "55",
        S60 => "60",
        S65 => "65",
        S70 => "70",
        S75 => "75",
        S80 => "80",
        S85 => "85",
        S90 => "90",
        S95 => "95",
        Invert => "invert",
        Light => "light",
        Dark => "dark",
        Soft => "soft",
        Bold => "bold",
        OnScheme => "on-scheme",
    }
}

closed_vocabulary! {
    /// Spacing shorthand keys. The key doubles as the class stem (`m-2`, `px-auto`).
    pub enum SpacingSide {
        M => "m",
        Mt => "mt",
        Mr => "mr",
        Mb => "mb",
        Ml => "ml",
        Mx => "mx",
        My => "my",
        P => "p",
        Pt => "pt",
        Pr => "pr",
        Pb => "pb",
        Pl => "pl",
        Px => "px",
        Py => "py",
    }
}

closed_vocabulary! {
    /// Spacing scale steps.
    pub enum Spacing {
        S0 => "0",
        S1 => "1",
        S2 => "2",
        S3 => "3",
        S4 => "4",
        S5 => "5",
        S6 => "6",
        Auto => "auto",
    }
}

closed_vocabulary! {
    /// `is-size-*` typography steps.
    pub enum TextSize {
        S1 => "1",
        S2 => "2",
        S3 => "3",
        S4 => "4",
        S5 => "5",
        S6 => "6",
        S7 => "7",
    }
}

closed_vocabulary! {
    /// Text alignment helpers.
    pub enum TextAlign {
        Centered => "centered",
        Justified => "justified",
        Left => "left",
        Right => "right",
    }
}

closed_vocabulary! {
    /// Text transformation helpers.
    pub enum TextTransform {
        Capitalized => "capitalized",
        Lowercase => "lowercase",
        Uppercase => "uppercase",
        Italic => "italic",
        Underlined => "underlined",
    }
}

closed_vocabulary! {
    /// Font weight helpers.
    pub enum TextWeight {
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
        Extrabold => "extrabold",
    }
}

closed_vocabulary! {
    /// Font family helpers.
    pub enum FontFamily {
        SansSerif => "sans-serif",
        Monospace => "monospace",
        Primary => "primary",
        Secondary => "secondary",
        Code => "code",
    }
}

closed_vocabulary! {
    /// Display values. `none` renders as Bulma's `is-hidden` helper.
    pub enum Display {
        Block => "block",
        Flex => "flex",
        Inline => "inline",
        InlineBlock => "inline-block",
        InlineFlex => "inline-flex",
        Hidden => "none",
    }
}

impl Display {
    /// Word used in the `is-*` class; differs from the parse token only for `none`.
    pub fn class_word(self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            other => other.token(),
        }
    }

    /// `flex` and `inline-flex` unlock the flexbox helpers.
    pub fn is_flex_like(self) -> bool {
        matches!(self, Self::Flex | Self::InlineFlex)
    }
}

closed_vocabulary! {
    /// Responsive breakpoints, smallest first.
    pub enum Viewport {
        Mobile => "mobile",
        Tablet => "tablet",
        Desktop => "desktop",
        Widescreen => "widescreen",
        Fullhd => "fullhd",
    }
}

impl Viewport {
    /// Name of the viewport-specific display property (`displayMobile`, ...).
    pub fn display_key(self) -> &'static str {
        match self {
            Self::Mobile => "displayMobile",
            Self::Tablet => "displayTablet",
            Self::Desktop => "displayDesktop",
            Self::Widescreen => "displayWidescreen",
            Self::Fullhd => "displayFullhd",
        }
    }

    /// Inverse of [`Viewport::display_key`].
    pub fn from_display_key(key: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|viewport| viewport.display_key() == key)
    }
}

closed_vocabulary! {
    /// Visibility helpers, independent of display.
    pub enum Visibility {
        Hidden => "hidden",
        SrOnly => "sr-only",
    }
}

closed_vocabulary! {
    /// `flex-direction` values.
    pub enum FlexDirection {
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

closed_vocabulary! {
    /// `flex-wrap` values.
    pub enum FlexWrap {
        Nowrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

closed_vocabulary! {
    /// `justify-content` values.
    pub enum JustifyContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Start => "start",
        End => "end",
        Left => "left",
        Right => "right",
    }
}

closed_vocabulary! {
    /// `align-content` values.
    pub enum AlignContent {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
        Stretch => "stretch",
        Start => "start",
        End => "end",
        Baseline => "baseline",
    }
}

closed_vocabulary! {
    /// `align-items` values.
    pub enum AlignItems {
        Stretch => "stretch",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Start => "start",
        End => "end",
        SelfStart => "self-start",
        SelfEnd => "self-end",
    }
}

closed_vocabulary! {
    /// `align-self` values.
    pub enum AlignSelf {
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Baseline => "baseline",
        Stretch => "stretch",
    }
}

closed_vocabulary! {
    /// `flex-grow` / `flex-shrink` factors.
    pub enum FlexFactor {
        F0 => "0",
        F1 => "1",
        F2 => "2",
        F3 => "3",
        F4 => "4",
        F5 => "5",
    }
}

closed_vocabulary! {
    /// Float helpers, rendered as `is-pulled-*`.
    pub enum Float {
        Left => "left",
        Right => "right",
    }
}

closed_vocabulary! {
    /// Overflow helpers.
    pub enum Overflow {
        Clipped => "clipped",
    }
}

closed_vocabulary! {
    /// Pointer interaction helpers.
    pub enum Interaction {
        Unselectable => "unselectable",
        Clickable => "clickable",
    }
}

closed_vocabulary! {
    /// Border radius helpers.
    pub enum Radius {
        Radiusless => "radiusless",
    }
}

closed_vocabulary! {
    /// Shadow helpers.
    pub enum Shadow {
        Shadowless => "shadowless",
    }
}

closed_vocabulary! {
    /// Responsive layout helpers.
    pub enum Responsive {
        Mobile => "mobile",
        Narrow => "narrow",
    }
}

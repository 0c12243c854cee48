/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

/// Colours used when drawing letters and their annexes
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Secondary text such as footers and organisation descriptions
    pub const DARK_GREY: Colour = Colour::Grey { g: 0.3 };
    /// Separator rules
    pub const RULE_GREY: Colour = Colour::Grey { g: 0.6 };
    /// Background tint of the information sheet warning box
    pub const WARNING_FILL: Colour = Colour::RGB {
        r: 1.0,
        g: 0.95,
        b: 0.8,
    };
    /// Border of the information sheet warning box
    pub const WARNING_BORDER: Colour = Colour::RGB {
        r: 0.85,
        g: 0.55,
        b: 0.0,
    };
}

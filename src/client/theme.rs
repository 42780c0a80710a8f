/// Escala tipográfica compartilhada pelas telas do app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    pub xsmall: u16,
    pub small: u16,
    pub normal: u16,
    pub medium: u16,
    pub large: u16,
    pub xlarge: u16,
    pub xxlarge: u16,
    pub xxxlarge: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub font_size: FontScale,
}

pub const DEFAULT_THEME: Theme = Theme {
    font_size: FontScale {
        xsmall: 12,
        small: 14,
        normal: 16,
        medium: 18,
        large: 20,
        xlarge: 24,
        xxlarge: 28,
        xxxlarge: 32,
    },
};

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_is_increasing() {
        let f = DEFAULT_THEME.font_size;
        let steps = [
            f.xsmall, f.small, f.normal, f.medium, f.large, f.xlarge, f.xxlarge, f.xxxlarge,
        ];
        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

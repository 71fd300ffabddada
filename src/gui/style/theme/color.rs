use iced::Color;

#[macro_export]
macro_rules! rgba8 {
    ($r:expr, $g:expr, $b:expr, $a:expr) => {
        iced::Color {
            r: $r / 255.0,
            g: $g / 255.0,
            b: $b / 255.0,
            a: $a,
        }
    };
}

pub fn mix(a: Color, b: Color) -> Color {
    Color {
        r: (a.r + b.r) / 2.0,
        g: (a.g + b.g) / 2.0,
        b: (a.b + b.b) / 2.0,
        a: (a.a + b.a) / 2.0,
    }
}

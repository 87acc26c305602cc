//! True-color terminal preview of a row of swatches.

use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;

const SWATCH_WIDTH: usize = 11;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// One line of colored blocks, each labelled with its hex code in a
/// readable text color.
pub fn swatch_row(colors: &[Color]) -> String {
    let mut line = String::from("  ");
    for &c in colors {
        let label = format!("{:^width$}", c.to_hex(), width = SWATCH_WIDTH);
        let styled = label.with(to_term(c.readable_text())).on(to_term(c));
        line.push_str(&styled.to_string());
        line.push(' ');
    }
    line
}

/// Print a labelled row of swatches to stdout.
pub fn print_swatches(title: &str, colors: &[Color]) {
    println!("  {title}");
    println!("{}", swatch_row(colors));
}

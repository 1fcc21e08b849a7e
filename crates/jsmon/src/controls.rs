use colored::Colorize;

use jsdispatch::{Control, Group};

use crate::print_info;

/// Describes the record that reaches `control`.
pub(crate) fn describe(control: Control) -> String {
    if let Some(button) = control.button() {
        return format!("group {} id {:>2} value passed through", Group::Button as u8, button.id());
    }
    match control.axis() {
        Some((axis, sign)) => {
            let side = if sign < 0 { "< 0" } else { "> 0" };
            format!("group {} id {:>2} value {side} (and = 0)", Group::Axis as u8, axis.id())
        }
        None => String::new(),
    }
}

pub(crate) fn print_controls() {
    for control in Control::ALL {
        print_info!("{:<18} {}", control.name().bold(), describe(control));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_buttons_and_directions() {
        assert_eq!(describe(Control::Start), "group 1 id  9 value passed through");
        assert_eq!(describe(Control::DPadLeft), "group 2 id  4 value < 0 (and = 0)");
        assert_eq!(describe(Control::LeftStickDown), "group 2 id  1 value > 0 (and = 0)");
    }
}

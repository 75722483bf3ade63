use std::io::{self, Write};

use domain::endpoint::Endpoint;

/// What the user picked from the sidebar menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// An endpoint name, possibly outside the known set; unknown names still
    /// get a form with only the common file field.
    Endpoint(String),
    Quit,
    Invalid,
}

/// Renders one activatable entry per endpoint, in list order, with the
/// active entry marked.
pub fn render_menu<W: Write>(out: &mut W, active: Option<&str>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Available endpoints:")?;
    for (index, endpoint) in Endpoint::ALL.iter().enumerate() {
        let marker = if active == Some(endpoint.name()) {
            '*'
        } else {
            ' '
        };
        writeln!(out, " {marker} {:2}. {}", index + 1, endpoint)?;
    }
    writeln!(out, "    q. quit")?;
    Ok(())
}

pub fn parse_menu_choice(input: &str) -> MenuChoice {
    let input = input.trim();
    if input.is_empty() {
        return MenuChoice::Invalid;
    }
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return MenuChoice::Quit;
    }
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| Endpoint::ALL.get(index))
            .map_or(MenuChoice::Invalid, |endpoint| {
                MenuChoice::Endpoint(endpoint.name().to_string())
            });
    }
    MenuChoice::Endpoint(input.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_entry_in_order_with_the_active_marker() {
        let mut out = Vec::new();
        render_menu(&mut out, Some("crop")).unwrap();
        let text = String::from_utf8(out).unwrap();

        let resize_at = text.find("1. resize").unwrap();
        let crop_at = text.find("2. crop").unwrap();
        let add_text_at = text.find("11. add_text").unwrap();
        assert!(resize_at < crop_at && crop_at < add_text_at);
        assert!(text.contains(" *  2. crop"));
        assert!(!text.contains(" *  1. resize"));
    }

    #[test]
    fn numbers_and_names_both_select_endpoints() {
        assert_eq!(
            parse_menu_choice("1"),
            MenuChoice::Endpoint("resize".to_string())
        );
        assert_eq!(
            parse_menu_choice("list_fonts"),
            MenuChoice::Endpoint("list_fonts".to_string())
        );
        assert_eq!(
            parse_menu_choice("posterize"),
            MenuChoice::Endpoint("posterize".to_string())
        );
    }

    #[test]
    fn quit_and_out_of_range_inputs() {
        assert_eq!(parse_menu_choice("q"), MenuChoice::Quit);
        assert_eq!(parse_menu_choice("QUIT"), MenuChoice::Quit);
        assert_eq!(parse_menu_choice("0"), MenuChoice::Invalid);
        assert_eq!(parse_menu_choice("99"), MenuChoice::Invalid);
        assert_eq!(parse_menu_choice("   "), MenuChoice::Invalid);
    }
}

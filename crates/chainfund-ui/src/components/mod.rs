//! Reusable UI primitives

mod badge;
mod button;
mod card;
mod dialog;
mod input;
mod progress;
mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use input::*;
pub use progress::*;
pub use toast::*;

/// Join a base class with optional extra classes
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|s| !s.is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_joins() {
        assert_eq!(class_list("btn", None), "btn");
        assert_eq!(class_list("btn", Some("  ")), "btn");
        assert_eq!(class_list("btn", Some("wide")), "btn wide");
    }
}

//! Hover nudge for contact list items.

pub const CONTACT_HOVER_TRANSFORM: &str = "translateX(10px) scale(1.02)";
pub const CONTACT_REST_TRANSFORM: &str = "translateX(0) scale(1)";

/// Transform for a contact item given whether the pointer is over it.
pub fn contact_transform(hovered: bool) -> &'static str {
    if hovered {
        CONTACT_HOVER_TRANSFORM
    } else {
        CONTACT_REST_TRANSFORM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_nudges_right_and_leave_resets() {
        assert_eq!(contact_transform(true), "translateX(10px) scale(1.02)");
        assert_eq!(contact_transform(false), "translateX(0) scale(1)");
    }
}

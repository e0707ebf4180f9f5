use crate::session::user::UserProfile;

/// Read side of the session, consumed by anything that gates rendering or
/// routing on who is logged in.
pub trait SessionView {
    fn user(&self) -> Option<UserProfile>;

    /// True during the start-up recovery attempt only.
    fn is_loading(&self) -> bool;

    /// Always derived from [`SessionView::user`].
    fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    fn is_approved_seller(&self) -> bool {
        self.user().is_some_and(|user| user.is_approved_seller())
    }
}

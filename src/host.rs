//! Collaborators a page host supplies to the controllers: navigation and
//! user-facing notifications.

pub trait Navigator {
    /// Navigates to an absolute path such as `/entries/7/edit`.
    ///
    /// With `skip_location_change` the router switches views without pushing a
    /// history entry.
    fn navigate_by_url(&mut self, url: &str, skip_location_change: bool);
}

pub trait Notifier {
    /// Transient success toast.
    fn success(&mut self, message: &str);

    /// Transient error toast.
    fn error(&mut self, message: &str);

    /// Blocking alert.
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

use crate::models::{Book, User};

/// Outcome of gating a read/listen action on a book.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Gate {
    /// Signed in and entitled; show the content.
    Proceed,
    /// No session; send to the login page instead of the content.
    Login,
    /// Signed in but not premium on a subscription-required book;
    /// send to plan selection instead of the content.
    ChoosePlan,
}

/// UX guard applied before reading or listening to a book. There is no
/// deeper enforcement behind it; the same decision also runs
/// server-side on the gated routes.
pub fn gate(book: &Book, user: Option<&User>) -> Gate {
    let Some(user) = user else {
        return Gate::Login;
    };

    if book.is_premium() && !user.is_premium() {
        return Gate::ChoosePlan;
    }

    Gate::Proceed
}

/// Saving to the library only needs a session; premium is not
/// required to bookmark a premium title.
pub fn gate_save(user: Option<&User>) -> Gate {
    match user {
        Some(_) => Gate::Proceed,
        None => Gate::Login,
    }
}

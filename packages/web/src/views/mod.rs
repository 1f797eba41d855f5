mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod feed;
pub use feed::Feed;

mod goals;
pub use goals::Goals;

mod goal_detail;
pub use goal_detail::GoalDetail;

mod circles;
pub use circles::Circles;

mod circle_detail;
pub use circle_detail::CircleDetail;

mod buddies;
pub use buddies::Buddies;

mod profile;
pub use profile::Profile;

mod settings;
pub use settings::Settings;

use validator::ValidationErrors;

/// Inline error text for one form field, if any.
pub(crate) fn field_message(
    errors: &Option<ValidationErrors>,
    field: &str,
) -> Option<String> {
    errors
        .as_ref()
        .and_then(|errors| api::forms::first_message(errors, field))
}

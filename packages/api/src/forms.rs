//! Form validation.
//!
//! Each form holds raw input as typed by the user and implements
//! [`Validate`], producing field-scoped [`ValidationErrors`] as data —
//! validation runs synchronously and locally, so an invalid submission
//! never reaches the HTTP layer. Cross-field rules (date ordering, password
//! confirmation, conditional required-ness) attach their error to the field
//! the user has to fix.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

use crate::models::{CreateCheckInInput, CreateCircleInput, CreateGoalInput, GoalType};

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// First error message recorded for a field, for inline display.
pub fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    for (name, list) in errors.field_errors() {
        if name == field {
            return list.first().map(|error| {
                error
                    .message
                    .clone()
                    .map(|message| message.into_owned())
                    .unwrap_or_else(|| error.code.to_string())
            });
        }
    }
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn none_if_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.username.is_empty() {
            errors.add("username", field_error("required", "Username is required"));
        }
        if self.password.is_empty() {
            errors.add("password", field_error("required", "Password is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let username_len = self.username.chars().count();
        if username_len < 3 {
            errors.add(
                "username",
                field_error("length", "Username must be at least 3 characters"),
            );
        } else if username_len > 50 {
            errors.add(
                "username",
                field_error("length", "Username must be 50 characters or less"),
            );
        }
        if !self.email.validate_email() {
            errors.add("email", field_error("email", "Invalid email address"));
        }
        if self.password.chars().count() < 6 {
            errors.add(
                "password",
                field_error("length", "Password must be at least 6 characters"),
            );
        }
        if self.confirm_password.is_empty() {
            errors.add(
                "confirm_password",
                field_error("required", "Please confirm your password"),
            );
        } else if self.confirm_password != self.password {
            errors.add(
                "confirm_password",
                field_error("mismatch", "Passwords don't match"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Goal form; dates arrive as `YYYY-MM-DD` strings from date inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub goal_type: Option<GoalType>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub circle_id: Option<i64>,
}

impl Validate for GoalForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title_len = self.title.chars().count();
        if title_len == 0 {
            errors.add("title", field_error("required", "Title is required"));
        } else if title_len > 50 {
            errors.add(
                "title",
                field_error("length", "Title must be 50 characters or less"),
            );
        }
        if self.description.chars().count() > 256 {
            errors.add(
                "description",
                field_error("length", "Description must be 256 characters or less"),
            );
        }
        if self.goal_type.is_none() {
            errors.add(
                "goal_type",
                field_error("required", "Please select a goal type"),
            );
        }
        if let (Some(start), Some(end)) = (parse_date(&self.start_date), parse_date(&self.end_date))
        {
            if end <= start {
                errors.add(
                    "end_date",
                    field_error("order", "End date must be after start date"),
                );
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl GoalForm {
    /// Validate and convert into the write payload.
    pub fn parsed(&self) -> Result<CreateGoalInput, ValidationErrors> {
        self.validate()?;
        Ok(CreateGoalInput {
            title: self.title.clone(),
            description: none_if_empty(&self.description),
            // validate() has rejected a missing type already
            goal_type: self.goal_type.unwrap_or_default(),
            is_active: Some(self.is_active),
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
            circle_id: self.circle_id,
        })
    }
}

/// Check-in form. Content is required only when the parent goal's type is
/// `project` or `habit`.
#[derive(Debug, Clone, Default)]
pub struct CheckInForm {
    pub content: String,
    pub goal_type: Option<GoalType>,
}

impl Validate for CheckInForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let requires_content = self
            .goal_type
            .map(|goal_type| goal_type.requires_check_in_content())
            .unwrap_or(false);
        if requires_content && self.content.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.add(
                "content",
                field_error("required", "Content is required for project and habit goals"),
            );
            return Err(errors);
        }
        Ok(())
    }
}

impl CheckInForm {
    pub fn parsed(&self, goal_id: i64) -> Result<CreateCheckInInput, ValidationErrors> {
        self.validate()?;
        Ok(CreateCheckInInput {
            content: none_if_empty(&self.content),
            goal_id: Some(goal_id),
            target_id: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CircleForm {
    pub name: String,
    pub description: String,
}

impl Validate for CircleForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name_len = self.name.chars().count();
        if name_len == 0 {
            errors.add("name", field_error("required", "Name is required"));
        } else if name_len > 100 {
            errors.add(
                "name",
                field_error("length", "Name must be 100 characters or less"),
            );
        }
        if self.description.chars().count() > 500 {
            errors.add(
                "description",
                field_error("length", "Description must be 500 characters or less"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl CircleForm {
    pub fn parsed(&self) -> Result<CreateCircleInput, ValidationErrors> {
        self.validate()?;
        Ok(CreateCircleInput {
            name: self.name.clone(),
            description: none_if_empty(&self.description),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub content: String,
}

impl Validate for CommentForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let len = self.content.chars().count();
        if len == 0 {
            errors.add("content", field_error("required", "Comment cannot be empty"));
        } else if len > 500 {
            errors.add(
                "content",
                field_error("length", "Comment must be 500 characters or less"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuddyRequestForm {
    pub message: String,
}

impl Validate for BuddyRequestForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.message.chars().count() > 256 {
            let mut errors = ValidationErrors::new();
            errors.add(
                "message",
                field_error("length", "Message must be 256 characters or less"),
            );
            return Err(errors);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CircleMessageForm {
    pub content: String,
}

impl Validate for CircleMessageForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let len = self.content.chars().count();
        if len == 0 {
            errors.add("content", field_error("required", "Message cannot be empty"));
        } else if len > 1000 {
            errors.add(
                "content",
                field_error("length", "Message must be 1000 characters or less"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Validate for ChangePasswordForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.current_password.is_empty() {
            errors.add(
                "current_password",
                field_error("required", "Current password is required"),
            );
        }
        if self.new_password.chars().count() < 6 {
            errors.add(
                "new_password",
                field_error("length", "New password must be at least 6 characters"),
            );
        }
        if self.confirm_password.is_empty() {
            errors.add(
                "confirm_password",
                field_error("required", "Please confirm your new password"),
            );
        } else if self.confirm_password != self.new_password {
            errors.add(
                "confirm_password",
                field_error("mismatch", "Passwords don't match"),
            );
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_for(result: Result<(), ValidationErrors>, field: &str) -> Option<String> {
        result.err().and_then(|errors| first_message(&errors, field))
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "username").as_deref(),
            Some("Username is required")
        );
        assert_eq!(
            first_message(&errors, "password").as_deref(),
            Some("Password is required")
        );

        let form = LoginForm {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_each_rule_independently() {
        let valid = RegisterForm {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterForm {
            username: "al".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            message_for(short_username.validate(), "username").as_deref(),
            Some("Username must be at least 3 characters")
        );

        let long_username = RegisterForm {
            username: "a".repeat(51),
            ..valid.clone()
        };
        assert_eq!(
            message_for(long_username.validate(), "username").as_deref(),
            Some("Username must be 50 characters or less")
        );

        let bad_email = RegisterForm {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            message_for(bad_email.validate(), "email").as_deref(),
            Some("Invalid email address")
        );

        let short_password = RegisterForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            message_for(short_password.validate(), "password").as_deref(),
            Some("Password must be at least 6 characters")
        );

        let mismatch = RegisterForm {
            confirm_password: "different".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            message_for(mismatch.validate(), "confirm_password").as_deref(),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn test_register_rules_combine() {
        let form = RegisterForm {
            username: "al".to_string(),
            email: "nope".to_string(),
            password: "abc".to_string(),
            confirm_password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert!(first_message(&errors, "username").is_some());
        assert!(first_message(&errors, "email").is_some());
        assert!(first_message(&errors, "password").is_some());
        assert_eq!(
            first_message(&errors, "confirm_password").as_deref(),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_goal_end_date_must_follow_start_date() {
        let base = GoalForm {
            title: "Read more".to_string(),
            goal_type: Some(GoalType::Daily),
            is_active: true,
            ..GoalForm::default()
        };

        let backwards = GoalForm {
            start_date: "2024-06-10".to_string(),
            end_date: "2024-06-01".to_string(),
            ..base.clone()
        };
        assert_eq!(
            message_for(backwards.validate(), "end_date").as_deref(),
            Some("End date must be after start date")
        );

        // Equal dates are not strictly later
        let equal = GoalForm {
            start_date: "2024-06-10".to_string(),
            end_date: "2024-06-10".to_string(),
            ..base.clone()
        };
        assert!(equal.validate().is_err());

        let ordered = GoalForm {
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-10".to_string(),
            ..base.clone()
        };
        assert!(ordered.validate().is_ok());

        // Either date alone passes
        let only_end = GoalForm {
            end_date: "2024-06-10".to_string(),
            ..base.clone()
        };
        assert!(only_end.validate().is_ok());
        assert!(base.validate().is_ok());
    }

    #[test]
    fn test_goal_field_rules() {
        let form = GoalForm {
            title: String::new(),
            description: "d".repeat(257),
            goal_type: None,
            ..GoalForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "title").as_deref(),
            Some("Title is required")
        );
        assert_eq!(
            first_message(&errors, "description").as_deref(),
            Some("Description must be 256 characters or less")
        );
        assert_eq!(
            first_message(&errors, "goal_type").as_deref(),
            Some("Please select a goal type")
        );

        let long_title = GoalForm {
            title: "t".repeat(51),
            goal_type: Some(GoalType::Custom),
            ..GoalForm::default()
        };
        assert_eq!(
            message_for(long_title.validate(), "title").as_deref(),
            Some("Title must be 50 characters or less")
        );
    }

    #[test]
    fn test_goal_parsed_builds_payload() {
        let form = GoalForm {
            title: "Ship the report".to_string(),
            description: "  ".to_string(),
            goal_type: Some(GoalType::Project),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-10".to_string(),
            is_active: true,
            circle_id: Some(3),
        };
        let input = form.parsed().unwrap();
        assert_eq!(input.title, "Ship the report");
        assert!(input.description.is_none());
        assert_eq!(input.goal_type, GoalType::Project);
        assert_eq!(input.start_date.map(|d| d.to_string()).as_deref(), Some("2024-06-01"));
        assert_eq!(input.circle_id, Some(3));
    }

    #[test]
    fn test_check_in_content_required_by_goal_type() {
        for goal_type in [GoalType::Project, GoalType::Habit] {
            let empty = CheckInForm {
                content: String::new(),
                goal_type: Some(goal_type),
            };
            assert_eq!(
                message_for(empty.validate(), "content").as_deref(),
                Some("Content is required for project and habit goals")
            );

            let filled = CheckInForm {
                content: "made progress".to_string(),
                goal_type: Some(goal_type),
            };
            assert!(filled.validate().is_ok());
        }

        for goal_type in [
            GoalType::Daily,
            GoalType::Weekly,
            GoalType::Monthly,
            GoalType::Custom,
        ] {
            let empty = CheckInForm {
                content: String::new(),
                goal_type: Some(goal_type),
            };
            assert!(empty.validate().is_ok());
        }

        // Absent goal type also passes with empty content
        assert!(CheckInForm::default().validate().is_ok());
    }

    #[test]
    fn test_circle_and_comment_bounds() {
        let circle = CircleForm {
            name: String::new(),
            description: "d".repeat(501),
        };
        let errors = circle.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "name").as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            first_message(&errors, "description").as_deref(),
            Some("Description must be 500 characters or less")
        );

        let comment = CommentForm {
            content: "c".repeat(501),
        };
        assert_eq!(
            message_for(comment.validate(), "content").as_deref(),
            Some("Comment must be 500 characters or less")
        );
        assert_eq!(
            message_for(CommentForm::default().validate(), "content").as_deref(),
            Some("Comment cannot be empty")
        );
    }

    #[test]
    fn test_message_forms() {
        assert!(BuddyRequestForm::default().validate().is_ok());
        let long = BuddyRequestForm {
            message: "m".repeat(257),
        };
        assert_eq!(
            message_for(long.validate(), "message").as_deref(),
            Some("Message must be 256 characters or less")
        );

        assert_eq!(
            message_for(CircleMessageForm::default().validate(), "content").as_deref(),
            Some("Message cannot be empty")
        );
        let long = CircleMessageForm {
            content: "m".repeat(1001),
        };
        assert_eq!(
            message_for(long.validate(), "content").as_deref(),
            Some("Message must be 1000 characters or less")
        );
    }

    #[test]
    fn test_change_password_rules() {
        let form = ChangePasswordForm {
            current_password: String::new(),
            new_password: "abc".to_string(),
            confirm_password: "abcd".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_message(&errors, "current_password").as_deref(),
            Some("Current password is required")
        );
        assert_eq!(
            first_message(&errors, "new_password").as_deref(),
            Some("New password must be at least 6 characters")
        );
        assert_eq!(
            first_message(&errors, "confirm_password").as_deref(),
            Some("Passwords don't match")
        );

        let valid = ChangePasswordForm {
            current_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
            confirm_password: "new-secret".to_string(),
        };
        assert!(valid.validate().is_ok());
    }
}

//! Form input captured from the view
//!
//! Presence checks only: a field counts as filled when it is non-empty.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Feed delivered to a batch; `note` is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedingForm {
    pub bags: String,
    pub amount: String,
    pub note: String,
}

impl FeedingForm {
    pub fn is_complete(&self) -> bool {
        !self.bags.is_empty() && !self.amount.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MortalityForm {
    pub count: String,
    pub reason: String,
}

use crate::session::{AuthMethod, Credentials};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInField {
    #[default]
    Email,
    Password,
    Submit,
    Google,
}

impl SignInField {
    const ORDER: [SignInField; 4] = [
        SignInField::Email,
        SignInField::Password,
        SignInField::Submit,
        SignInField::Google,
    ];

    fn step(self, forward: bool) -> SignInField {
        let len = Self::ORDER.len();
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward { i + 1 } else { i + len - 1 };
        Self::ORDER[next % len]
    }
}

/// Contents of the sign-in dialog
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub mode: SignInMode,
    pub field: SignInField,
    pub email: String,
    pub password: String,
    /// Validation problem shown under the fields
    pub error: Option<String>,
}

impl SignInForm {
    pub fn next_field(&mut self) {
        self.field = self.field.step(true);
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.step(false);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SignInMode::SignIn => SignInMode::SignUp,
            SignInMode::SignUp => SignInMode::SignIn,
        };
        self.error = None;
    }

    pub fn input(&mut self, c: char) {
        match self.field {
            SignInField::Email => self.email.push(c),
            SignInField::Password => self.password.push(c),
            SignInField::Submit | SignInField::Google => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            SignInField::Email => {
                self.email.pop();
            }
            SignInField::Password => {
                self.password.pop();
            }
            SignInField::Submit | SignInField::Google => {}
        }
    }

    /// Credentials for the focused action. Email sign-in needs both fields.
    pub fn credentials(&mut self) -> Option<Credentials> {
        let method = match (self.field, self.mode) {
            (SignInField::Google, _) => AuthMethod::Google,
            (_, SignInMode::SignIn) => AuthMethod::SignIn,
            (_, SignInMode::SignUp) => AuthMethod::SignUp,
        };

        if method != AuthMethod::Google
            && (self.email.trim().is_empty() || self.password.is_empty())
        {
            self.error = Some("Email and password are required".to_string());
            return None;
        }

        self.error = None;
        Some(Credentials {
            method,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = SignInForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignInForm {
        let mut form = SignInForm::default();
        "ada@example.com".chars().for_each(|c| form.input(c));
        form.next_field();
        "secret".chars().for_each(|c| form.input(c));
        form
    }

    #[test]
    fn fields_cycle() {
        let mut form = SignInForm::default();
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.field, SignInField::Google);
        form.next_field();
        assert_eq!(form.field, SignInField::Email);
        form.prev_field();
        assert_eq!(form.field, SignInField::Google);
    }

    #[test]
    fn input_goes_to_focused_field() {
        let mut form = filled();
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.password, "secret");
        form.backspace();
        assert_eq!(form.password, "secre");
        form.next_field();
        form.input('x');
        assert_eq!(form.password, "secre");
    }

    #[test]
    fn email_sign_in_requires_both_fields() {
        let mut form = SignInForm::default();
        "ada@example.com".chars().for_each(|c| form.input(c));
        assert!(form.credentials().is_none());
        assert!(form.error.is_some());
    }

    #[test]
    fn google_needs_no_fields() {
        let mut form = SignInForm {
            field: SignInField::Google,
            ..SignInForm::default()
        };
        let creds = form.credentials().unwrap();
        assert_eq!(creds.method, AuthMethod::Google);
    }

    #[test]
    fn mode_selects_method() {
        let mut form = filled();
        assert_eq!(form.credentials().unwrap().method, AuthMethod::SignIn);
        form.toggle_mode();
        let creds = form.credentials().unwrap();
        assert_eq!(creds.method, AuthMethod::SignUp);
        assert_eq!(creds.email, "ada@example.com");
    }
}

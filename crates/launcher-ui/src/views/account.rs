use crate::{
    models::UserLookup,
    platform::Notice,
    views::Outcome,
    AppContext,
};

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm: String,
    pub invite_code: String,
}

impl RegistrationForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm
    }
}

/// Login, registration and logout.
pub struct AccountView {
    ctx: AppContext,
    pub login: LoginForm,
    pub registration: RegistrationForm,
    register_modal_open: bool,
}

impl AccountView {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            ctx: ctx.clone(),
            login: LoginForm::default(),
            registration: RegistrationForm::default(),
            register_modal_open: false,
        }
    }

    pub fn is_register_modal_open(&self) -> bool {
        self.register_modal_open
    }

    pub fn open_register_modal(&mut self) {
        self.register_modal_open = true;
        self.ctx.redraw.request();
    }

    pub fn close_register_modal(&mut self) {
        self.register_modal_open = false;
        self.ctx.redraw.request();
    }

    pub async fn on_login(&mut self) -> Outcome {
        let LoginForm { username, password } = self.login.clone();

        match self.ctx.backend.login_user(&username, &password).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::info!(%username, "Login refused");
                self.ctx.notify(Notice::error("Error", "Invalid credentials")).await;
                return Outcome::Refused;
            }
            Err(error) => {
                self.ctx.notify(Notice::error("Error", error.to_string())).await;
                return Outcome::Failed;
            }
        }

        match self.ctx.backend.load_user_data(&username).await {
            Ok(UserLookup::Found(user) | UserLookup::MissingStatus(user)) => self.ctx.session.set_user(Some(user)),
            Ok(UserLookup::NotFound) => tracing::warn!(%username, "Logged in but the user has no record"),
            Err(error) => {
                self.ctx.notify(Notice::error("Error", error.to_string())).await;
                return Outcome::Failed;
            }
        }

        tracing::info!(%username, "Logged in");
        self.ctx.notify(Notice::info("Success", "Logged in successfully")).await;
        Outcome::Done
    }

    pub async fn on_register(&mut self) -> Outcome {
        if !self.registration.passwords_match() {
            self.ctx.notify(Notice::error("Error", "Passwords do not match")).await;
            return Outcome::Invalid;
        }

        let form = &self.registration;
        let result = self
            .ctx
            .backend
            .register_user(&form.username, &form.password, &form.invite_code)
            .await;

        match result {
            Ok(message) => {
                self.ctx.notify(Notice::info("Account created", message)).await;
                self.close_register_modal();
                Outcome::Done
            }
            Err(error) => {
                self.ctx
                    .notify(Notice::error("Registration error", error.to_string()))
                    .await;
                Outcome::Failed
            }
        }
    }

    pub async fn on_logout(&mut self) -> Outcome {
        let outcome = match self.ctx.session.logout().await {
            Ok(()) => Outcome::Done,
            Err(_) => Outcome::Failed,
        };

        self.ctx
            .notify(Notice::info("Signed out", "You have signed out successfully."))
            .await;
        outcome
    }
}

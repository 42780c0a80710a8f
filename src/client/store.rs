use crate::models::{Product, UserProfile};

use super::api::AuthGateway;
use super::error::ClientError;

/// Items picked up during the current store visit.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Soma dos preços unitários. O mesmo produto escaneado em visitas
    /// de tela diferentes entra mais de uma vez, de propósito.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Auth state of the app.
#[derive(Debug, Default)]
pub struct Session {
    access_token: Option<String>,
    profile: Option<UserProfile>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Username/password sign-in followed by the profile fetch.
    /// O token é guardado assim que o login responde; se só o fetch do
    /// perfil falhar, a sessão continua autenticada e o erro sobe para
    /// a tela decidir o que mostrar.
    pub async fn sign_in<G>(
        &mut self,
        api: &G,
        username: &str,
        password: &str,
    ) -> Result<(), ClientError>
    where
        G: AuthGateway + ?Sized,
    {
        let response = api.login(username, password).await?;

        let token = response.access_token;
        self.access_token = Some(token.clone());

        let profile = api.profile(&token).await?;
        self.profile = Some(profile);

        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.access_token = None;
        self.profile = None;
    }
}

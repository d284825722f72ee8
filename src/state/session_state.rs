// ============================================================================
// SESSION STATE - Identidad de la sesión compartida por toda la app
// ============================================================================
// Un único SessionScope vive en AppContext. Cualquier vista con el
// contexto puede leer el nombre o cambiarlo con set_user_name.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::state::reactivity::{ReactiveState, SubscriptionId};

/// Lookup asíncrono de la identidad del usuario
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn lookup(&self) -> Result<String, ApiError>;
}

/// Identidad literal (configurable via DEFAULT_USER_NAME)
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    name: String,
}

impl StaticIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.default_user_name.clone())
    }
}

impl IdentityProvider for StaticIdentity {
    async fn lookup(&self) -> Result<String, ApiError> {
        Ok(self.name.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStatus {
    NotStarted,
    Running,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// El nombre obtenido se asignó
    Applied,
    /// Alguien llamó a set_user_name durante el lookup; se conserva ese valor
    Superseded,
    /// El inicializador ya corrió (o está corriendo)
    AlreadyStarted,
    /// Todos los intentos fallaron; la sesión sigue sin usuario
    Failed,
}

/// Scope de sesión
#[derive(Clone)]
pub struct SessionScope {
    user_name: ReactiveState<Option<String>>,
    status: Rc<Cell<InitStatus>>,
    // Se incrementa en cada set_user_name
    version: Rc<Cell<u64>>,
}

impl SessionScope {
    pub fn new() -> Self {
        Self {
            user_name: ReactiveState::new(None),
            status: Rc::new(Cell::new(InitStatus::NotStarted)),
            version: Rc::new(Cell::new(0)),
        }
    }

    pub fn logged_in_user(&self) -> Option<String> {
        self.user_name.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_name.with(Option::is_some)
    }

    pub fn status(&self) -> InitStatus {
        self.status.get()
    }

    /// Setter disponible para cualquier vista
    pub fn set_user_name(&self, name: impl Into<String>) {
        let name = name.into();
        log::info!("👤 [SESSION] Usuario actualizado: {}", name);
        self.version.set(self.version.get() + 1);
        self.user_name.set(Some(name));
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&str>) + 'static,
    {
        self.user_name
            .subscribe(move |name: &Option<String>| callback(name.as_deref()))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.user_name.unsubscribe(id)
    }

    /// Inicializador de la raíz: corre una sola vez tras la primera activación
    pub async fn initialize<P: IdentityProvider>(&self, provider: &P, attempts: u32) -> InitOutcome {
        if self.status.get() != InitStatus::NotStarted {
            log::warn!("⚠️ [SESSION] initialize ya fue llamado, ignorando llamada duplicada");
            return InitOutcome::AlreadyStarted;
        }
        self.run_lookup(provider, attempts).await
    }

    /// Reintento manual tras un initialize fallido
    pub async fn retry_initialize<P: IdentityProvider>(&self, provider: &P, attempts: u32) -> InitOutcome {
        if self.status.get() != InitStatus::Failed {
            return InitOutcome::AlreadyStarted;
        }
        self.run_lookup(provider, attempts).await
    }

    async fn run_lookup<P: IdentityProvider>(&self, provider: &P, attempts: u32) -> InitOutcome {
        self.status.set(InitStatus::Running);
        let version = self.version.get();
        let attempts = attempts.max(1);

        for attempt in 1..=attempts {
            match provider.lookup().await {
                Ok(name) => {
                    self.status.set(InitStatus::Ready);
                    if self.version.get() != version {
                        log::info!("👤 [SESSION] Nombre cambiado durante el lookup, se conserva el actual");
                        return InitOutcome::Superseded;
                    }
                    log::info!("✅ [SESSION] Identidad obtenida: {}", name);
                    self.user_name.set(Some(name));
                    return InitOutcome::Applied;
                }
                Err(e) => {
                    log::warn!("⚠️ [SESSION] Lookup de identidad falló (intento {}/{}): {}", attempt, attempts, e);
                }
            }
        }

        log::error!("❌ [SESSION] Sin identidad tras {} intentos, sesión sin usuario", attempts);
        self.status.set(InitStatus::Failed);
        InitOutcome::Failed
    }
}

impl Default for SessionScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FlakyIdentity;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn initializer_assigns_literal_name_once() {
        let session = SessionScope::new();
        assert_eq!(session.logged_in_user(), None);

        let outcome = block_on(session.initialize(&StaticIdentity::new("Amarnath Mishra"), 3));
        assert_eq!(outcome, InitOutcome::Applied);
        assert_eq!(session.logged_in_user().as_deref(), Some("Amarnath Mishra"));

        let again = block_on(session.initialize(&StaticIdentity::new("Other"), 3));
        assert_eq!(again, InitOutcome::AlreadyStarted);
        assert_eq!(session.logged_in_user().as_deref(), Some("Amarnath Mishra"));
    }

    #[test]
    fn every_consumer_sees_latest_name() {
        let session = SessionScope::new();
        let header = session.clone();
        let card = session.clone();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        header.subscribe(move |name| sink.borrow_mut().push(name.map(str::to_string)));

        block_on(session.initialize(&StaticIdentity::new("Amarnath Mishra"), 1));
        card.set_user_name("Likan");

        assert_eq!(header.logged_in_user().as_deref(), Some("Likan"));
        assert_eq!(
            *seen.borrow(),
            vec![Some("Amarnath Mishra".to_string()), Some("Likan".to_string())]
        );
    }

    #[test]
    fn lookup_retries_then_succeeds() {
        let session = SessionScope::new();
        let provider = FlakyIdentity::new("Amarnath Mishra", 2);

        let outcome = block_on(session.initialize(&provider, 3));

        assert_eq!(outcome, InitOutcome::Applied);
        assert_eq!(provider.calls.get(), 3);
        assert_eq!(session.status(), InitStatus::Ready);
    }

    #[test]
    fn failed_lookup_stays_unauthenticated_and_can_retry() {
        let session = SessionScope::new();
        let provider = FlakyIdentity::new("Amarnath Mishra", 2);

        assert_eq!(block_on(session.initialize(&provider, 2)), InitOutcome::Failed);
        assert!(!session.is_authenticated());
        assert_eq!(session.status(), InitStatus::Failed);

        assert_eq!(block_on(session.retry_initialize(&provider, 1)), InitOutcome::Applied);
        assert!(session.is_authenticated());
    }

    #[test]
    fn user_edit_before_lookup_completes_wins() {
        struct EditingIdentity {
            session: SessionScope,
        }
        impl IdentityProvider for EditingIdentity {
            async fn lookup(&self) -> Result<String, ApiError> {
                // El usuario escribe su nombre mientras el lookup está en curso
                self.session.set_user_name("Typed");
                Ok("From lookup".to_string())
            }
        }

        let session = SessionScope::new();
        let provider = EditingIdentity { session: session.clone() };

        assert_eq!(block_on(session.initialize(&provider, 1)), InitOutcome::Superseded);
        assert_eq!(session.logged_in_user().as_deref(), Some("Typed"));
    }
}

use crate::api::User;
use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(SessionState::default());
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn sign_in(set_session: WriteSignal<SessionState>, user: User) {
    log::info!("Signed in user {}", user.id);
    set_session.update(|state| state.user = Some(user));
}

pub fn sign_out(set_session: WriteSignal<SessionState>) {
    set_session.update(|state| state.user = None);
}

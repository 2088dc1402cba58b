//! Board event loop
//!
//! The dispatcher owns the board state and applies events one at a time.
//! Network effects run as spawned tasks that post their result back into the
//! same channel, so the loop stays responsive while requests are in flight
//! and the last response to arrive decides what is rendered.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};
use crate::services::ApiClient;
use crate::state::{update, BoardOptions, BoardState, Effect, Event, Rejection};
use crate::utils::logging::log_api_error;
use crate::view::{render, ViewNode};

/// Receives a full view tree after every applied event
pub trait Renderer {
    fn render(&mut self, view: &ViewNode);
}

impl<F: FnMut(&ViewNode)> Renderer for F {
    fn render(&mut self, view: &ViewNode) {
        self(view)
    }
}

/// Messages travelling through the dispatcher channel
#[derive(Debug)]
enum Envelope {
    /// Raised by the user or a timer
    Input(Event),
    /// Result of a network effect
    Completion(Event),
}

/// Handle for feeding user events into a running dispatcher
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: UnboundedSender<Envelope>,
}

impl EventSender {
    /// Queue an event; returns false once the dispatcher has stopped
    pub fn send(&self, event: Event) -> bool {
        self.tx.send(Envelope::Input(event)).is_ok()
    }
}

pub struct Dispatcher {
    state: BoardState,
    api: ApiClient,
    tx: UnboundedSender<Envelope>,
    rx: UnboundedReceiver<Envelope>,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(api: ApiClient, options: BoardOptions) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: BoardState::new(options),
            api,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn view(&self) -> ViewNode {
        render(&self.state)
    }

    pub fn sender(&self) -> EventSender {
        EventSender { tx: self.tx.clone() }
    }

    /// Number of network effects whose result has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply one event and start the effects it produces
    pub fn dispatch(&mut self, event: Event) {
        let transition = update(&self.state, event);
        self.state = transition.state;
        for effect in transition.effects {
            self.run_effect(effect);
        }
    }

    /// Wait for the next queued event and apply it
    ///
    /// Returns `None` when the channel is closed or a shutdown was requested.
    pub async fn step(&mut self) -> Option<()> {
        let envelope = self.rx.recv().await?;
        self.apply(envelope).then_some(())
    }

    /// Apply events until no network effect is in flight
    ///
    /// Pending message timers do not count; they fire later on their own.
    pub async fn settle(&mut self) {
        loop {
            while let Ok(envelope) = self.rx.try_recv() {
                if !self.apply(envelope) {
                    return;
                }
            }
            if self.in_flight == 0 {
                return;
            }
            let Some(envelope) = self.rx.recv().await else {
                return;
            };
            if !self.apply(envelope) {
                return;
            }
        }
    }

    /// Returns false on shutdown
    fn apply(&mut self, envelope: Envelope) -> bool {
        let event = match envelope {
            Envelope::Completion(event) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                event
            }
            Envelope::Input(event) => event,
        };

        if event == Event::Shutdown {
            info!("Board shutdown requested");
            return false;
        }

        self.dispatch(event);
        true
    }

    /// Run the board until shutdown, rendering after every event
    pub async fn run<R: Renderer>(mut self, mut renderer: R) -> BoardState {
        self.dispatch(Event::PageLoaded);
        renderer.render(&self.view());

        while self.step().await.is_some() {
            renderer.render(&self.view());
        }

        self.state
    }

    fn run_effect(&mut self, effect: Effect) {
        debug!(effect = ?redact(&effect), "Running effect");

        if let Effect::DismissMessage { id, after } = effect {
            let tx = self.tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                let _ = tx.send(Envelope::Input(Event::MessageExpired(id)));
            });
            return;
        }

        self.in_flight += 1;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = perform(&api, effect).await;
            if tx.send(Envelope::Completion(event)).is_err() {
                warn!("Board stopped before a response was applied");
            }
        });
    }
}

/// Execute a network effect and describe its result as an event
async fn perform(api: &ApiClient, effect: Effect) -> Event {
    match effect {
        Effect::FetchActivities => {
            Event::ActivitiesLoaded(api.fetch_activities().await.map_err(|e| reject("activities", e)))
        }
        Effect::RestoreSession => match api.current_user().await {
            Ok(user) => Event::SessionRestored(user.map(|u| u.username)),
            Err(e) => {
                log_api_error("auth_me", &e);
                Event::SessionRestored(None)
            }
        },
        Effect::Login { username, password } => Event::LoginCompleted(
            api.login(&username, &password)
                .await
                .map(|response| response.username)
                .map_err(|e| reject("login", e)),
        ),
        Effect::Logout => Event::LogoutCompleted(api.logout().await.map_err(|e| reject("logout", e))),
        Effect::Signup { activity, email } => {
            let outcome = api.signup(&activity, &email).await.map_err(|e| reject("signup", e));
            Event::SignupCompleted { activity, email, outcome }
        }
        Effect::Unregister { activity, email } => {
            let outcome = api.unregister(&activity, &email).await.map_err(|e| reject("unregister", e));
            Event::UnregisterCompleted { activity, email, outcome }
        }
        Effect::RegisterStudent { activity, email } => {
            let outcome = api
                .register_student(&activity, &email)
                .await
                .map_err(|e| reject("register_student", e));
            Event::RegisterStudentCompleted { activity, email, outcome }
        }
        Effect::UnregisterStudent { activity, email } => {
            let outcome = api
                .unregister_student(&activity, &email)
                .await
                .map_err(|e| reject("unregister_student", e));
            Event::UnregisterStudentCompleted { activity, email, outcome }
        }
        Effect::DismissMessage { id, .. } => Event::MessageExpired(id),
    }
}

fn reject(api: &str, error: crate::utils::errors::BoardError) -> Rejection {
    log_api_error(api, &error);
    Rejection::from(error)
}

/// Keep passwords out of debug logs
fn redact(effect: &Effect) -> Effect {
    match effect {
        Effect::Login { username, .. } => Effect::Login {
            username: username.clone(),
            password: "***".to_string(),
        },
        other => other.clone(),
    }
}

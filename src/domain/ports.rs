use crate::utils::error::Result;

/// A pure state transition: `(previous state, action) -> next state`.
///
/// Implementations only ever see borrowed input, so the previous state can
/// never be written through.
pub trait Reducer {
    type State: Clone + std::fmt::Debug;
    type Action: std::fmt::Debug;

    fn default_state(&self) -> Self::State;

    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Applies `action`, starting from the default state when there is no previous one.
    fn reduce(&self, previous: Option<&Self::State>, action: &Self::Action) -> Self::State {
        match previous {
            Some(state) => self.apply(state, action),
            None => self.apply(&self.default_state(), action),
        }
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project_file(&self) -> Option<&str>;
    fn actions_file(&self) -> Option<&str>;
    fn settings_actions_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn strict(&self) -> bool;
}

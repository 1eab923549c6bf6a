
pub(crate) use scripted_transport::{ScriptedError, ScriptedRead, ScriptedTransport};

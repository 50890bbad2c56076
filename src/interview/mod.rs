pub mod config;
pub mod media;
pub mod message;
pub mod responder;
pub mod results;
pub mod session;

pub use config::{InterviewStyle, RecruiterConfig};
pub use media::{LoopbackGateway, MediaAccessError, MediaGateway, MediaStream, StreamKind};
pub use message::{Message, Speaker};
pub use responder::{InterviewResponder, QuestionSource, Reply, ResponderError, ScriptedResponder};
pub use results::{InterviewResults, ResultsPresenter};
pub use session::{InterviewSession, PhaseError, SessionPhase, SubmitRejection};

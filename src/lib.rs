pub mod error;
pub mod factory;
pub mod guard;
pub mod interpreter;
pub mod limits;
pub mod matcher;
pub mod model;
pub mod morph;
pub mod persist;
pub mod question;
pub mod quiz;
pub mod session;
pub mod timer;
pub mod view;

pub use error::QuizError;
pub use model::{AnswerValue, Number, QuestionRecord, QuestionType, QuizRecord};
pub use question::{Question, Variant};
pub use quiz::Quiz;
pub use session::EditSession;

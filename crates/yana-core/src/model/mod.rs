mod context;
mod evaluation;
mod flow;

pub use context::{ApiSpec, ComponentDescriptor, RetrievalContext};
pub use evaluation::{
    Assessment, CriterionScore, Evaluation, EvaluationSource, Issue, IssueCode, Severity,
};
pub use flow::{ApiCall, ComponentRef, Flow, FlowStep, FormField, RegistryKind};

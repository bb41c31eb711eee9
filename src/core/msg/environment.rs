use serde::{Deserialize, Serialize};

use crate::domain::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentMsg {
    Select(Environment),
    Toggle,
}

use crate::config::CPFConfig;
use serde::{Deserialize, Serialize};
use stowage::io::ext_repr::{ExtInstance, ExtSolution};

/// Full output of a CPF run, ready to be serialized
#[derive(Serialize, Deserialize, Clone)]
pub struct CPFOutput {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CPFConfig,
}

use crate::domain::DadosRow;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct DadosResponse {
    pub dados: Vec<DadosRow>,
}

// src/data.rs

use crate::model::ScoringRule;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AreaShare {
    pub area: String,
    pub percentual: u8,
}

/// Perfil fixo do concurso (banca, cargo, conteúdo programático...)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExamProfile {
    pub banca: String,
    pub banca_extenso: String,
    pub orgao: String,
    pub nivel: String,
    pub escolaridade: String,
    pub cargo: String,
    pub estilo: String,
    pub distribuicao: Vec<AreaShare>,
    pub conteudo: Vec<String>,
    #[serde(default)]
    pub regras: Vec<String>,
    #[serde(default)]
    pub pontuacao: ScoringRule,
}

/// Carrega o perfil do concurso a partir do YAML embutido
pub fn read_exam_profile_embedded() -> Result<ExamProfile, serde_yaml::Error> {
    let file_content = include_str!("data/exam_profile.yaml");
    serde_yaml::from_str(file_content)
}

use serde_json::{json, Value};

use crate::candidate::domain::CandidateInput;

/// Payload with every section filled in and valid.
pub fn complete_candidate_json() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "García",
        "email": "ana.garcia@example.com",
        "phone": "612345678",
        "address": "Calle Mayor 1, Madrid",
        "educations": [{
            "institution": "Universidad Complutense",
            "title": "Grado en Ingeniería Informática",
            "startDate": "2015-09-01",
            "endDate": "2019-06-30"
        }],
        "workExperiences": [{
            "company": "Acme S.L.",
            "position": "Backend Developer",
            "description": "APIs y bases de datos",
            "startDate": "2019-09-01",
            "endDate": "2024-06-30"
        }],
        "cv": {
            "filePath": "/uploads/ana-garcia.pdf",
            "fileType": "application/pdf"
        }
    })
}

pub fn minimal_candidate_json() -> Value {
    json!({
        "firstName": "Ana",
        "lastName": "García",
        "email": "ana.garcia@example.com"
    })
}

/// Returns `base` with `key` set to `value` at the top level.
pub fn with(mut base: Value, key: &str, value: Value) -> Value {
    base[key] = value;
    base
}

pub fn decode(value: Value) -> CandidateInput {
    serde_json::from_value(value).expect("fixture must decode")
}

use crate::{
    model::kpi::{CreateKpiDto, KpiDto, KpiScoreDto, RecordKpiScoreDto, UpdateKpiDto},
    server::validate::{self, Validate},
};

#[derive(Debug, Clone)]
pub struct CreateKpiParams {
    pub name: String,
    pub description: String,
    pub weight: i32,
}

impl CreateKpiParams {
    pub fn from_dto(dto: CreateKpiDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            weight: dto.weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateKpiParams {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub weight: i32,
}

impl UpdateKpiParams {
    pub fn from_dto(id: i32, dto: UpdateKpiDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            weight: dto.weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordKpiScoreParams {
    pub kpi_id: i32,
    pub employee_id: i32,
    pub period: String,
    pub score: i32,
}

impl RecordKpiScoreParams {
    pub fn from_dto(employee_id: i32, dto: RecordKpiScoreDto) -> Self {
        Self {
            kpi_id: dto.kpi_id,
            employee_id,
            period: dto.period,
            score: dto.score,
        }
    }
}

impl From<entity::kpi::Model> for KpiDto {
    fn from(model: entity::kpi::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            weight: model.weight,
        }
    }
}

impl KpiScoreDto {
    pub fn from_entity(score: entity::kpi_score::Model, kpi: Option<entity::kpi::Model>) -> Self {
        Self {
            id: score.id,
            kpi_id: score.kpi_id,
            kpi_name: kpi.map(|k| k.name),
            employee_id: score.employee_id,
            period: score.period,
            score: score.score,
            recorded_at: score.recorded_at,
        }
    }
}

/// Reporting periods are `YYYY-MM`.
fn is_period(value: &str) -> bool {
    let Some((year, month)) = value.split_once('-') else {
        return false;
    };
    if year.len() != 4 || month.len() != 2 {
        return false;
    }
    if !year.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

impl Validate for CreateKpiDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("name", &self.name, &mut violations);
        validate::min_len("name", &self.name, 3, &mut violations);
        validate::required("description", &self.description, &mut violations);
        validate::in_range("weight", self.weight as f64, 1.0, 100.0, &mut violations);
        violations
    }
}

impl Validate for UpdateKpiDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("name", &self.name, &mut violations);
        validate::min_len("name", &self.name, 3, &mut violations);
        validate::required("description", &self.description, &mut violations);
        validate::in_range("weight", self.weight as f64, 1.0, 100.0, &mut violations);
        violations
    }
}

impl Validate for RecordKpiScoreDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::positive("kpi_id", self.kpi_id as i64, &mut violations);
        validate::required("period", &self.period, &mut violations);
        if !self.period.trim().is_empty() && !is_period(&self.period) {
            violations.push("field 'period' is not valid".to_string());
        }
        validate::in_range("score", self.score as f64, 0.0, 100.0, &mut violations);
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::is_period;

    #[test]
    fn period_format() {
        assert!(is_period("2026-01"));
        assert!(is_period("2026-12"));

        assert!(!is_period("2026-13"));
        assert!(!is_period("2026-00"));
        assert!(!is_period("26-01"));
        assert!(!is_period("2026/01"));
        assert!(!is_period("202601"));
    }
}

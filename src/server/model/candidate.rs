use crate::{
    model::candidate::{
        CandidateDto, ChangeCandidateStatusDto, CreateCandidateDto, UpdateCandidateDto,
    },
    server::validate::{self, Validate},
};

/// Hiring pipeline states. Stored as strings in the database; parsing
/// rejects anything outside this set before any transition is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    Applied,
    Screening,
    Interview,
    Offered,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub const VALUES: &'static [&'static str] = &[
        "applied",
        "screening",
        "interview",
        "offered",
        "hired",
        "rejected",
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "applied" => Some(Self::Applied),
            "screening" => Some(Self::Screening),
            "interview" => Some(Self::Interview),
            "offered" => Some(Self::Offered),
            "hired" => Some(Self::Hired),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Offered => "offered",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }

    /// The pipeline only moves forward one stage at a time; any non-terminal
    /// state may fall out to `Rejected`.
    pub fn can_transition(self, to: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self, to) {
            (_, Self::Rejected) => true,
            (Self::Applied, Self::Screening) => true,
            (Self::Screening, Self::Interview) => true,
            (Self::Interview, Self::Offered) => true,
            (Self::Offered, Self::Hired) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCandidateParams {
    pub vacancy_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl CreateCandidateParams {
    pub fn from_dto(dto: CreateCandidateDto) -> Self {
        Self {
            vacancy_id: dto.vacancy_id,
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCandidateParams {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl UpdateCandidateParams {
    pub fn from_dto(id: i32, dto: UpdateCandidateDto) -> Self {
        Self {
            id,
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

impl CandidateDto {
    pub fn from_entity(
        candidate: entity::candidate::Model,
        vacancy: Option<entity::vacancy::Model>,
    ) -> Self {
        Self {
            id: candidate.id,
            vacancy_id: candidate.vacancy_id,
            vacancy_title: vacancy.map(|v| v.title),
            full_name: candidate.full_name,
            email: candidate.email,
            phone: candidate.phone,
            status: candidate.status,
            applied_at: candidate.applied_at,
        }
    }
}

impl Validate for CreateCandidateDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::positive("vacancy_id", self.vacancy_id as i64, &mut violations);
        validate::required("full_name", &self.full_name, &mut violations);
        validate::min_len("full_name", &self.full_name, 3, &mut violations);
        validate::required("email", &self.email, &mut violations);
        validate::email("email", &self.email, &mut violations);
        violations
    }
}

impl Validate for UpdateCandidateDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("full_name", &self.full_name, &mut violations);
        validate::min_len("full_name", &self.full_name, 3, &mut violations);
        validate::required("email", &self.email, &mut violations);
        validate::email("email", &self.email, &mut violations);
        violations
    }
}

impl Validate for ChangeCandidateStatusDto {
    fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        validate::required("status", &self.status, &mut violations);
        if !self.status.trim().is_empty() {
            validate::one_of(
                "status",
                &self.status,
                CandidateStatus::VALUES,
                &mut violations,
            );
        }
        violations
    }
}

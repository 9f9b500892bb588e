//! Identifier generation

use crate::services::IdGenerator;
use crate::utils::generate_uuid;

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_random_id(&self) -> String {
        generate_uuid()
    }
}

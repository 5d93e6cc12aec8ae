use uuid::Uuid;

/// Source of fresh operation identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> Uuid + Send + Sync,
{
    fn next_id(&self) -> Uuid {
        self()
    }
}

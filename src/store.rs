use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::{Pet, PetPayload, ValidationError};

/// Errors returned by pet store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No pet with this id exists
    NotFound(u64),
    /// Payload failed validation
    InvalidInput(ValidationError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "pet {} not found", id),
            StoreError::InvalidInput(err) => write!(f, "invalid pet data: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug)]
struct Inner {
    pets: RwLock<Vec<Pet>>,
    /// Last id handed out. Only ever incremented.
    last_id: AtomicU64,
}

/// Shareable in-memory pet directory for use across async handlers
///
/// All access to the collection goes through the methods below. Mutations
/// (create, update, delete) take the write lock; list and get only read.
/// Ids come from an atomic counter, so two concurrent creates can never be
/// handed the same id and ids of deleted pets are never reused.
#[derive(Debug, Clone)]
pub struct PetStore {
    inner: Arc<Inner>,
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStore {
    /// Create an empty store whose first assigned id is 1
    pub fn new() -> Self {
        Self::from_pets(Vec::new())
    }

    /// Create the store in its startup state: fido the dog and kitty the cat
    pub fn with_seed_data() -> Self {
        Self::from_pets(vec![
            Pet {
                id: 1,
                name: "fido".to_string(),
                kind: "dog".to_string(),
            },
            Pet {
                id: 2,
                name: "kitty".to_string(),
                kind: "cat".to_string(),
            },
        ])
    }

    fn from_pets(pets: Vec<Pet>) -> Self {
        let last_id = pets.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            inner: Arc::new(Inner {
                pets: RwLock::new(pets),
                last_id: AtomicU64::new(last_id),
            }),
        }
    }

    fn next_id(&self) -> u64 {
        self.inner.last_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of pets currently stored
    pub fn len(&self) -> usize {
        self.inner.pets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// List pets in creation order, optionally keeping only an exact `kind`
    pub fn list(&self, kind: Option<&str>) -> Vec<Pet> {
        let pets = self.inner.pets.read();
        match kind {
            Some(kind) => pets.iter().filter(|p| p.kind == kind).cloned().collect(),
            None => pets.clone(),
        }
    }

    /// Fetch a single pet by id
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no pet has this id
    pub fn get(&self, id: u64) -> Result<Pet, StoreError> {
        self.inner
            .pets
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new pet, assigning it the next id
    pub fn create(&self, payload: PetPayload) -> Pet {
        let mut pets = self.inner.pets.write();
        // Allocated under the write lock so the collection stays in id order
        let pet = Pet {
            id: self.next_id(),
            name: payload.name,
            kind: payload.kind,
        };
        pets.push(pet.clone());
        pet
    }

    /// Replace name and kind of an existing pet, keeping its id and position
    ///
    /// `payload` is only evaluated once the pet is known to exist, and both
    /// steps happen under the same write lock.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no pet has this id, or
    /// `StoreError::InvalidInput` if `payload` fails. Nothing is changed in
    /// either case.
    pub fn update<F>(&self, id: u64, payload: F) -> Result<Pet, StoreError>
    where
        F: FnOnce() -> Result<PetPayload, ValidationError>,
    {
        let mut pets = self.inner.pets.write();
        let pet = pets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let payload = payload().map_err(StoreError::InvalidInput)?;
        pet.name = payload.name;
        pet.kind = payload.kind;
        Ok(pet.clone())
    }

    /// Remove a pet if present. Returns the removed pet, `None` if it was absent.
    pub fn delete(&self, id: u64) -> Option<Pet> {
        let mut pets = self.inner.pets.write();
        let index = pets.iter().position(|p| p.id == id)?;
        Some(pets.remove(index))
    }
}

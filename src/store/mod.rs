use std::sync::{Arc, Mutex};

use crate::models::Student;

/// In-memory store owning the ordered collection of student records.
///
/// The store is the exclusive owner of the collection; handlers go through
/// its methods and never hold references to individual records across
/// requests. Mutation is guarded by a mutex so that concurrent requests
/// observe effects in arrival order. State is lost on restart.
///
/// No errors originate here: validation (required fields, uniqueness)
/// happens in the handler layer before a store method is called.
#[derive(Clone)]
pub struct StudentStore {
    records: Arc<Mutex<Vec<Student>>>,
}

impl StudentStore {
    /// Create an empty store.
    pub fn empty() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a store seeded with the two fixed startup records.
    pub fn seeded() -> Self {
        let seed = vec![
            Student {
                name: "Darshan".to_string(),
                roll_number: "101".to_string(),
                course: "CSE".to_string(),
            },
            Student {
                name: "Pranay".to_string(),
                roll_number: "102".to_string(),
                course: "IT".to_string(),
            },
        ];
        Self {
            records: Arc::new(Mutex::new(seed)),
        }
    }

    /// Snapshot of all records in storage order.
    pub fn list_all(&self) -> Vec<Student> {
        self.records.lock().expect("store lock poisoned").clone()
    }

    /// First record whose roll number equals `roll_number`.
    pub fn find_by_roll_number(&self, roll_number: &str) -> Option<Student> {
        let records = self.records.lock().expect("store lock poisoned");
        records
            .iter()
            .find(|s| s.roll_number == roll_number)
            .cloned()
    }

    /// Append a record unless one already shares its roll number. The
    /// uniqueness check and the insert happen under one lock, so two
    /// concurrent creates with the same roll number cannot both land.
    /// Returns false if the roll number is taken.
    pub fn insert_unique(&self, student: Student) -> bool {
        let mut records = self.records.lock().expect("store lock poisoned");
        if records
            .iter()
            .any(|s| s.roll_number == student.roll_number)
        {
            return false;
        }
        records.push(student);
        true
    }

    /// Remove and return the first record (storage order) whose roll number
    /// equals `roll_number` OR whose name equals `name`. Lookup and removal
    /// are one critical section; exactly one record is removed per call.
    pub fn remove_by_roll_or_name(
        &self,
        roll_number: Option<&str>,
        name: Option<&str>,
    ) -> Option<Student> {
        let mut records = self.records.lock().expect("store lock poisoned");
        let index = records.iter().position(|s| {
            roll_number.is_some_and(|r| s.roll_number == r) || name.is_some_and(|n| s.name == n)
        })?;
        Some(records.remove(index))
    }

    /// Apply a partial update to the record with the given roll number.
    /// Only non-empty replacement fields overwrite; the roll number itself
    /// is never changed. Returns false if no record matches.
    pub fn update(&self, roll_number: &str, name: Option<&str>, course: Option<&str>) -> bool {
        let mut records = self.records.lock().expect("store lock poisoned");
        let Some(student) = records.iter_mut().find(|s| s.roll_number == roll_number) else {
            return false;
        };
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            student.name = name.to_string();
        }
        if let Some(course) = course.filter(|c| !c.is_empty()) {
            student.course = course.to_string();
        }
        true
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! In-memory roster for tests and embedding

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use super::{
    AssignmentId, AssignmentRecord, CategoryId, CategoryRecord, ClassId, EnrollmentRecord,
    GradeWriter, RosterProvider,
};
use crate::error::{GradebookError, Result};
use crate::grading::LetterGrade;

/// Roster kept entirely in memory.
///
/// Implements both collaborator traits so one value can be handed to the
/// engine as reader and writer. Ids are allocated sequentially.
#[derive(Debug, Default)]
pub struct MemoryRoster {
    next_id: i64,
    classes: Vec<ClassId>,
    categories: BTreeMap<CategoryId, (ClassId, CategoryRecord)>,
    assignments: BTreeMap<AssignmentId, (CategoryId, AssignmentRecord)>,
    scores: HashMap<(String, AssignmentId), u32>,
    enrollments: RefCell<BTreeMap<(String, ClassId), Option<String>>>,
    writes: Cell<usize>,
}

impl MemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn add_class(&mut self) -> ClassId {
        let id = ClassId(self.allocate());
        self.classes.push(id);
        id
    }

    pub fn add_category(&mut self, class: ClassId, name: &str, weight: u32) -> CategoryId {
        let id = CategoryId(self.allocate());
        let record = CategoryRecord {
            id,
            name: name.to_string(),
            weight,
        };
        self.categories.insert(id, (class, record));
        id
    }

    pub fn add_assignment(&mut self, category: CategoryId, name: &str, points: u32) -> AssignmentId {
        let id = AssignmentId(self.allocate());
        let record = AssignmentRecord {
            id,
            name: name.to_string(),
            points,
        };
        self.assignments.insert(id, (category, record));
        id
    }

    pub fn enroll(&mut self, student: &str, class: ClassId) {
        self.enrollments
            .get_mut()
            .insert((student.to_string(), class), None);
    }

    /// Store a raw grade label, bypassing the engine
    pub fn set_stored_grade(&mut self, student: &str, class: ClassId, grade: Option<&str>) {
        self.enrollments
            .get_mut()
            .insert((student.to_string(), class), grade.map(str::to_string));
    }

    pub fn set_score(&mut self, student: &str, assignment: AssignmentId, score: u32) {
        self.scores.insert((student.to_string(), assignment), score);
    }

    /// The grade currently stored for an enrollment
    pub fn stored_grade(&self, student: &str, class: ClassId) -> Option<String> {
        self.enrollments
            .borrow()
            .get(&(student.to_string(), class))
            .cloned()
            .flatten()
    }

    /// Number of grade writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl RosterProvider for MemoryRoster {
    fn class_exists(&self, class: ClassId) -> Result<bool> {
        Ok(self.classes.contains(&class))
    }

    fn is_enrolled(&self, student: &str, class: ClassId) -> Result<bool> {
        Ok(self
            .enrollments
            .borrow()
            .contains_key(&(student.to_string(), class)))
    }

    fn categories(&self, class: ClassId) -> Result<Vec<CategoryRecord>> {
        Ok(self
            .categories
            .values()
            .filter(|(owner, _)| *owner == class)
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn assignments(&self, category: CategoryId) -> Result<Vec<AssignmentRecord>> {
        Ok(self
            .assignments
            .values()
            .filter(|(owner, _)| *owner == category)
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn score(&self, student: &str, assignment: AssignmentId) -> Result<Option<u32>> {
        Ok(self
            .scores
            .get(&(student.to_string(), assignment))
            .copied())
    }

    fn enrollments(&self, student: &str) -> Result<Vec<EnrollmentRecord>> {
        Ok(self
            .enrollments
            .borrow()
            .iter()
            .filter(|((who, _), _)| who == student)
            .map(|((_, class), grade)| EnrollmentRecord {
                class: *class,
                grade: grade.clone(),
            })
            .collect())
    }

    fn enrolled_students(&self, class: ClassId) -> Result<Vec<String>> {
        Ok(self
            .enrollments
            .borrow()
            .keys()
            .filter(|(_, enrolled)| *enrolled == class)
            .map(|(student, _)| student.clone())
            .collect())
    }
}

impl GradeWriter for MemoryRoster {
    fn write_grade(&self, student: &str, class: ClassId, grade: LetterGrade) -> Result<()> {
        let mut enrollments = self.enrollments.borrow_mut();
        let slot = enrollments
            .get_mut(&(student.to_string(), class))
            .ok_or_else(|| GradebookError::not_found("enrollment", format!("{student} in {class}")))?;
        *slot = Some(grade.as_str().to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

//! Integration tests for the roster's full CRUD lifecycle.

use roster_core::entity::{EntityDraft, EntityKind};
use roster_core::error::StoreError;
use roster_core::roster::Roster;

fn draft(name: &str, email: &str) -> EntityDraft {
    EntityDraft {
        name: name.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn test_full_crud_lifecycle() {
    let roster = Roster::new();
    let students = roster.store(EntityKind::Student);

    // Create a batch of students
    for i in 1..=10 {
        let created = students
            .create(draft(&format!("Student {}", i), &format!("s{}@x.com", i)))
            .unwrap();
        assert_eq!(created.id, i);
    }

    // Read them back in insertion order
    let all = students.list().unwrap();
    assert_eq!(all.len(), 10);
    for (index, entity) in all.iter().enumerate() {
        assert_eq!(entity.id, (index + 1) as u64);
        assert_eq!(entity.name, format!("Student {}", index + 1));
    }

    // Update one in the middle
    let updated = students.update(5, draft("Renamed", "renamed@x.com")).unwrap();
    assert_eq!(updated.id, 5);
    assert_eq!(students.get(5).unwrap().name, "Renamed");

    // Delete it and verify it is gone
    let removed = students.delete(5).unwrap();
    assert_eq!(removed, updated);
    assert_eq!(
        students.get(5),
        Err(StoreError::NotFound {
            kind: EntityKind::Student,
            id: 5
        })
    );

    // Remaining entities keep their ids and order
    let ids: Vec<u64> = students.list().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 2, 3, 4, 6, 7, 8, 9, 10]);

    // New creates continue past the highest ever assigned id
    let next = students.create(draft("Student 11", "s11@x.com")).unwrap();
    assert_eq!(next.id, 11);
}

#[test]
fn test_kinds_are_fully_independent() {
    let roster = Roster::new();

    let student = roster
        .store(EntityKind::Student)
        .create(draft("Alice", "a@x.com"))
        .unwrap();
    let teacher = roster
        .store(EntityKind::Teacher)
        .create(draft("Turing", "t@x.com"))
        .unwrap();

    assert_eq!(student.id, 1);
    assert_eq!(teacher.id, 1);

    // Deleting from one store never touches the other
    roster.store(EntityKind::Student).delete(1).unwrap();
    assert_eq!(roster.store(EntityKind::Teacher).get(1).unwrap(), teacher);
    assert_eq!(
        roster.store(EntityKind::Student).get(1),
        Err(StoreError::NotFound {
            kind: EntityKind::Student,
            id: 1
        })
    );
}

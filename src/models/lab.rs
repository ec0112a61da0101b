//! Lab Vision measurement stations.

/// Station availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabStatus {
    Online,
    Offline,
}

impl LabStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LabStatus::Online => "Online",
            LabStatus::Offline => "Offline",
        }
    }
}

/// A measurement station selectable from the pathologist dashboard.
#[derive(Debug, Clone)]
pub struct Laboratory {
    pub id: String,
    pub name: String,
    pub room: String,
    pub status: LabStatus,
    pub exams_count: u32,
}

impl Laboratory {
    pub fn is_online(&self) -> bool {
        self.status == LabStatus::Online
    }
}

/// Find a station by id.
pub fn find<'a>(labs: &'a [Laboratory], id: &str) -> Option<&'a Laboratory> {
    labs.iter().find(|l| l.id == id)
}

fn lab(letter: char, room: u32, status: LabStatus, exams_count: u32) -> Laboratory {
    Laboratory {
        id: format!("lab-{}", letter.to_ascii_lowercase()),
        name: format!("Lab Vision {}", letter.to_ascii_uppercase()),
        room: format!("Room {}", room),
        status,
        exams_count,
    }
}

/// The eight demo stations.
pub fn seed_labs() -> Vec<Laboratory> {
    vec![
        lab('a', 101, LabStatus::Online, 12),
        lab('b', 102, LabStatus::Online, 8),
        lab('c', 103, LabStatus::Offline, 5),
        lab('d', 104, LabStatus::Online, 15),
        lab('e', 105, LabStatus::Online, 7),
        lab('f', 106, LabStatus::Offline, 3),
        lab('g', 107, LabStatus::Online, 11),
        lab('h', 108, LabStatus::Online, 9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_eight_labs() {
        let labs = seed_labs();
        assert_eq!(labs.len(), 8);
        assert_eq!(labs.iter().filter(|l| l.is_online()).count(), 6);
    }

    #[test]
    fn test_find_by_id() {
        let labs = seed_labs();
        let lab = find(&labs, "lab-a").expect("lab-a exists");
        assert_eq!(lab.name, "Lab Vision A");
        assert_eq!(lab.room, "Room 101");
        assert!(find(&labs, "lab-z").is_none());
    }
}

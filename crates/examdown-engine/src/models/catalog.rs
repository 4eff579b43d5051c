use std::collections::{BTreeMap, HashMap, HashSet};

use super::{IndexEntry, Scalar, SUBJECT_ORDER};

/// Problems of one subject, grouped by school then year.
#[derive(Debug)]
pub struct SubjectGroup<'a> {
    pub subject: &'a str,
    pub count: usize,
    /// Schools ascending; within a school, years ascending (render reversed).
    pub schools: BTreeMap<&'a str, BTreeMap<Option<&'a Scalar>, Vec<&'a IndexEntry>>>,
}

/// A read-only view over the index separating problems from solutions.
#[derive(Debug)]
pub struct Catalog<'a> {
    pub problems: Vec<&'a IndexEntry>,
    solutions: HashMap<&'a str, &'a IndexEntry>,
}

impl<'a> Catalog<'a> {
    pub fn new(entries: &'a [IndexEntry]) -> Self {
        let mut problems = vec![];
        let mut solutions = HashMap::new();
        for entry in entries {
            if !entry.is_solution {
                problems.push(entry);
            } else if let Some(problem_uid) = &entry.problem_uid {
                solutions.insert(problem_uid.as_str(), entry);
            }
        }
        Self {
            problems,
            solutions,
        }
    }

    /// The solution whose `problem_uid` names this problem, if any.
    pub fn solution_for(&self, uid: &str) -> Option<&'a IndexEntry> {
        self.solutions.get(uid).copied()
    }

    /// Problem uids that have at least one solution.
    pub fn solved_uids(&self) -> HashSet<&'a str> {
        self.solutions.keys().copied().collect()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Problems grouped for the hub, subjects in tab order.
    ///
    /// Subjects outside [`SUBJECT_ORDER`] and subjects without problems are
    /// left out. Entries within a year are sorted by problem number.
    pub fn grouped(&self) -> Vec<SubjectGroup<'a>> {
        SUBJECT_ORDER
            .iter()
            .filter_map(|&subject| {
                let mut schools: BTreeMap<_, BTreeMap<_, Vec<_>>> = BTreeMap::new();
                let mut count = 0;
                for entry in self.problems.iter().filter(|e| e.subject_category == subject) {
                    schools
                        .entry(entry.school.as_str())
                        .or_default()
                        .entry(entry.year.as_ref())
                        .or_default()
                        .push(*entry);
                    count += 1;
                }
                if count == 0 {
                    return None;
                }
                for years in schools.values_mut() {
                    for items in years.values_mut() {
                        items.sort_by(|a, b| a.number.cmp(&b.number));
                    }
                }
                Some(SubjectGroup {
                    subject,
                    count,
                    schools,
                })
            })
            .collect()
    }
}

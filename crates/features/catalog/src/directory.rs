use fxhash::FxHashMap;
use parking_lot::RwLock;
use stay_domain::{CompanyId, EmployeeId};
use stay_kernel::EmployeeDirectory;
use tracing::debug;

/// Employee-to-company membership kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    employees: RwLock<FxHashMap<EmployeeId, CompanyId>>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Employees currently registered for `company`, sorted by id.
    #[must_use]
    pub fn members(&self, company: &CompanyId) -> Vec<EmployeeId> {
        let mut members: Vec<EmployeeId> = self
            .employees
            .read()
            .iter()
            .filter(|(_, c)| *c == company)
            .map(|(e, _)| e.clone())
            .collect();
        members.sort();
        members
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn add_employee(&self, id: EmployeeId, company: CompanyId) {
        debug!(employee = %id, company = %company, "Employee registered");
        self.employees.write().insert(id, company);
    }

    fn delete_employee(&self, id: &EmployeeId) {
        if self.employees.write().remove(id).is_some() {
            debug!(employee = %id, "Employee removed");
        }
    }

    fn company_of(&self, id: &EmployeeId) -> Option<CompanyId> {
        self.employees.read().get(id).cloned()
    }
}

use std::sync::RwLock;

use rand::Rng;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee, USER_ID_MAX, USER_ID_MIN};

// Single canonical employee collection shared by every request. Reads and
// structural mutations are serialized through one RwLock so userid and email
// stay unique.
pub struct ResourceStore {
    employees: RwLock<Vec<Employee>>,
}

impl ResourceStore {
    pub fn new(employees: Vec<Employee>) -> Self {
        ResourceStore {
            employees: RwLock::new(employees),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Employee {
                first_name: "Maria".to_string(),
                last_name: "Sanchez".to_string(),
                email: "maria@example.com".to_string(),
                position: "staff".to_string(),
                userid: 101_444,
            },
            Employee {
                first_name: "Quo".to_string(),
                last_name: "Chen".to_string(),
                email: "quobinchen@domain.com".to_string(),
                position: "staff".to_string(),
                userid: 1_049_832,
            },
            Employee {
                first_name: "Danelle".to_string(),
                last_name: "Johnson".to_string(),
                email: "danellej@custom.com".to_string(),
                position: "manager".to_string(),
                userid: 276_076,
            },
            Employee {
                first_name: "Pete".to_string(),
                last_name: "Santos".to_string(),
                email: "psantos44@social.com".to_string(),
                position: "staff".to_string(),
                userid: 457_221,
            },
        ])
    }

    pub fn list(&self) -> Vec<Employee> {
        self.employees.read().expect("employees lock poisoned").clone()
    }

    // case-sensitive substring match on last_name, insertion order preserved
    pub fn search(&self, last_name: &str) -> Vec<Employee> {
        self.employees
            .read()
            .expect("employees lock poisoned")
            .iter()
            .filter(|employee| employee.last_name.contains(last_name))
            .cloned()
            .collect()
    }

    pub fn get(&self, userid: u32) -> Result<Employee, AppError> {
        self.employees
            .read()
            .expect("employees lock poisoned")
            .iter()
            .find(|employee| employee.userid == userid)
            .cloned()
            .ok_or_else(not_found)
    }

    pub fn create(&self, input: NewEmployee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().expect("employees lock poisoned");
        if employees.iter().any(|employee| employee.email == input.email) {
            return Err(email_in_use());
        }
        let employee = Employee {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            position: input.position,
            userid: next_userid(&employees),
        };
        employees.push(employee.clone());
        Ok(employee)
    }

    pub fn replace(&self, userid: u32, input: NewEmployee) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().expect("employees lock poisoned");
        let index = employees
            .iter()
            .position(|employee| employee.userid == userid)
            .ok_or_else(not_found)?;
        if employees
            .iter()
            .any(|employee| employee.userid != userid && employee.email == input.email)
        {
            return Err(email_in_use());
        }

        let employee = &mut employees[index];
        employee.first_name = input.first_name;
        employee.last_name = input.last_name;
        employee.email = input.email;
        employee.position = input.position;
        Ok(employee.clone())
    }

    pub fn patch(&self, userid: u32, input: EmployeeUpdate) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().expect("employees lock poisoned");
        let index = employees
            .iter()
            .position(|employee| employee.userid == userid)
            .ok_or_else(not_found)?;
        if let Some(email) = &input.email {
            if employees
                .iter()
                .any(|employee| employee.userid != userid && &employee.email == email)
            {
                return Err(email_in_use());
            }
        }

        let employee = &mut employees[index];
        if let Some(first_name) = input.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            employee.last_name = last_name;
        }
        if let Some(email) = input.email {
            employee.email = email;
        }
        if let Some(position) = input.position {
            employee.position = position;
        }
        Ok(employee.clone())
    }

    pub fn delete(&self, userid: u32) -> Result<(), AppError> {
        let mut employees = self.employees.write().expect("employees lock poisoned");
        let index = employees
            .iter()
            .position(|employee| employee.userid == userid)
            .ok_or_else(not_found)?;
        employees.remove(index);
        Ok(())
    }
}

fn next_userid(employees: &[Employee]) -> u32 {
    let mut rng = rand::thread_rng();
    loop {
        let candidate = rng.gen_range(USER_ID_MIN..=USER_ID_MAX);
        if !employees.iter().any(|employee| employee.userid == candidate) {
            return candidate;
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Resource not found".to_string())
}

fn email_in_use() -> AppError {
    AppError::Conflict("supplied email is already in use.".to_string())
}

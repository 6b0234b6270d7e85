//! Entity <-> DTO mappers
//!
//! `From` conversions from domain entities to response DTOs, and from
//! validated request DTOs to domain inputs.

use roster_core::{
    normalize_phone, NewStudent, NewVehicle, SortField, SortOrder, Student, StudentFilter,
    StudentPatch, StudentQuery, Task, TaskDraft, Vehicle,
};

use super::requests::{
    CreateStudentRequest, CreateVehicleRequest, SearchStudentsQuery, TaskRequest,
    UpdateStudentRequest,
};
use super::responses::{StudentResponse, TaskResponse, VehicleResponse};

// ============================================================================
// Student Mappers
// ============================================================================

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.to_string(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            age: student.age,
            gender: student.gender,
            phone: student.phone.clone(),
            email: student.email.clone(),
            created_at: student.created_at,
            updated_at: student.updated_at,
            is_active: student.is_active,
        }
    }
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self::from(&student)
    }
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(request: CreateStudentRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            gender: request.gender,
            phone: normalize_phone(&request.phone),
        }
    }
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(request: UpdateStudentRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            gender: request.gender,
            phone: request.phone.as_deref().map(normalize_phone),
        }
    }
}

impl From<SearchStudentsQuery> for StudentQuery {
    fn from(query: SearchStudentsQuery) -> Self {
        let sort = SortField::parse(&query.sort_by)
            .map(|field| (field, SortOrder::parse(Some(&query.sort_order))));

        Self {
            filter: StudentFilter {
                first_name: query.first_name,
                last_name: query.last_name,
                email: query.email,
                gender: query.gender,
                min_age: query.min_age,
                max_age: query.max_age,
            },
            sort,
            skip: usize::try_from(query.skip).unwrap_or(0),
            limit: usize::try_from(query.limit).unwrap_or(Self::DEFAULT_LIMIT),
        }
    }
}

// ============================================================================
// Task Mappers
// ============================================================================

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.to_string(),
            task_name: task.task_name.clone(),
            task_description: task.task_description.clone(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            category: task.category,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

impl From<TaskRequest> for TaskDraft {
    fn from(request: TaskRequest) -> Self {
        Self {
            task_name: request.task_name,
            task_description: request.task_description,
            status: request.status,
            priority: request.priority,
            due_date: request.due_date,
            category: request.category,
        }
    }
}

// ============================================================================
// Vehicle Mappers
// ============================================================================

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.to_string(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            body_type: vehicle.body_type,
            engine_size: vehicle.engine_size,
            transmission: vehicle.transmission,
            vehicle_age: vehicle.vehicle_age,
            fuel_type: vehicle.fuel_type,
            colour: vehicle.colour.clone(),
            vehicle_price: vehicle.vehicle_price,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
            is_available: vehicle.is_available,
        }
    }
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(request: CreateVehicleRequest) -> Self {
        Self {
            make: request.make,
            model: request.model,
            body_type: request.body_type,
            engine_size: request.engine_size,
            transmission: request.transmission,
            vehicle_age: request.vehicle_age,
            fuel_type: request.fuel_type,
            colour: request.colour,
            vehicle_price: request.vehicle_price,
        }
    }
}

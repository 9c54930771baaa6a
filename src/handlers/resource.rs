use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeUpdate, NewEmployee, USER_ID_MAX, USER_ID_MIN};
use crate::store::ResourceStore;
use crate::utils;

#[derive(Serialize)]
struct EmployeeCollection {
    employees: Vec<Employee>,
}

#[derive(Deserialize)]
pub(crate) struct ResourceQueryParams {
    last_name: Option<String>,
}

fn check_userid_bounds(userid: u32) -> Result<(), AppError> {
    if !(USER_ID_MIN..=USER_ID_MAX).contains(&userid) {
        return Err(AppError::InvalidArgument(format!(
            "userid must be between {} and {}",
            USER_ID_MIN, USER_ID_MAX
        )));
    }
    Ok(())
}

pub async fn get_resources(
    store: web::Data<ResourceStore>,
    query: web::Query<ResourceQueryParams>,
) -> Result<HttpResponse, actix_web::Error> {
    match query.last_name.as_deref() {
        Some(filter) if !filter.is_empty() => {
            let employees = store.search(filter);
            if employees.is_empty() {
                return Ok(HttpResponse::NotFound().json(json!({ "message": "no search results" })));
            }
            Ok(HttpResponse::Ok().json(EmployeeCollection { employees }))
        }
        // an empty filter behaves like no filter at all
        _ => Ok(HttpResponse::Ok().json(EmployeeCollection { employees: store.list() })),
    }
}

pub async fn get_resource_userid(
    store: web::Data<ResourceStore>,
    userid: web::Path<u32>,
) -> Result<HttpResponse, actix_web::Error> {
    let userid = userid.into_inner();
    check_userid_bounds(userid)?;

    let employee = store.get(userid)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_resource(
    store: web::Data<ResourceStore>,
    body: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let input = body.into_inner().trimmed();
    utils::validation::validate_payload(&input)?;

    let employee = store.create(input)?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn put_resource_userid(
    store: web::Data<ResourceStore>,
    userid: web::Path<u32>,
    body: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    let userid = userid.into_inner();
    check_userid_bounds(userid)?;

    let input = body.into_inner().trimmed();
    utils::validation::validate_payload(&input)?;

    let employee = store.replace(userid, input)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn patch_resource_userid(
    store: web::Data<ResourceStore>,
    userid: web::Path<u32>,
    body: web::Json<EmployeeUpdate>,
) -> Result<HttpResponse, actix_web::Error> {
    let userid = userid.into_inner();
    check_userid_bounds(userid)?;

    let input = body.into_inner().trimmed();
    utils::validation::validate_payload(&input)?;

    let employee = store.patch(userid, input)?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_resource_userid(
    store: web::Data<ResourceStore>,
    userid: web::Path<u32>,
) -> Result<HttpResponse, actix_web::Error> {
    let userid = userid.into_inner();
    check_userid_bounds(userid)?;

    store.delete(userid)?;
    Ok(HttpResponse::NoContent().finish())
}

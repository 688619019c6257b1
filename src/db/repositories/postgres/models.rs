use diesel::prelude::*;

use super::schema::students;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StudentRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub roll_no: String,
    pub password: String,
    pub contact_number: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub struct NewStudentRow {
    pub first_name: String,
    pub last_name: String,
    pub roll_no: String,
    pub password: String,
    pub contact_number: String,
}

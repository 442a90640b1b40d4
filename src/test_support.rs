//! Fixtures and an in-memory `UserStore` shared by the unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::models::{parse_record, record_id, UserRecord};
use crate::services::user_service::{UserStore, REMOVE_NOT_FOUND, UPDATE_NOT_FOUND};
use crate::utils::AppError;

pub const VALID_LONG_JSON: &str = "{'id':'1630215c-2608-44b9-aad4-9d56d8aafd4c',
'firstName':'Dorris',
'lastName':'Keeling',
'email':'Darby_Leffler68@gmail.com',
'address':{'street':'193 Talon Valley','city':'South Tate furt','zip':'47069','state':'IA','country':'US'},
'dateCreated':'2016-03-15T07:02:40.896Z',
'company':{'name':'Denesik Group','website':'http://jodie.org'},
'profilePic':'http://lorempixel.com/640/480/people'}";

pub const VALID_LONG_JSON_UPDATED: &str = "{'id':'1630215c-2608-44b9-aad4-9d56d8aafd4c',
'firstName':'Test',
'lastName':'Update',
'email':'Darby_Leffler68@gmail.com',
'address':{'street':'193 Talon Valley','city':'South Tate furt','zip':'47069','state':'IA','country':'US'},
'dateCreated':'2016-06-24T07:02:40.896Z',
'company':{'name':'Denesik Group','website':'http://jodie.org'},
'profilePic':'http://lorempixel.com/640/480/people'}";

pub const VALID_SHORT_JSON: &str = "{'id':'short',
'firstName':'Ekal',
'lastName':'Golas',
'email':'ekalgolas@gmail.com',
'dateCreated':'2016-06-15T07:02:40.896Z',
'profilePic':'http://lorempixel.com/640/480/people'}";

/// No `id` field
pub const INVALID_SHORT_JSON: &str = "{'firstName':'Ekal',
'lastName':'Golas',
'email':'ekalgolas@gmail.com',
'dateCreated':'2016-06-15T07:02:40.896Z',
'profilePic':'http://lorempixel.com/640/480/people'}";

/// Keeps records in a vector and applies the same rules as `MongoUserStore`
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<UserRecord> {
        self.users.lock().unwrap().clone()
    }
}

fn position(users: &[UserRecord], id: &str) -> Option<usize> {
    users.iter().position(|u| record_id(u) == Some(id))
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(self.snapshot())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(position(&users, id).map(|i| users[i].clone()))
    }

    async fn create(&self, json: &str) -> Result<(), AppError> {
        let record = parse_record(json)?;
        let id = record_id(&record)
            .ok_or_else(|| AppError::MalformedInput("Field 'id' is required and must be a string".into()))?
            .to_owned();

        let mut users = self.users.lock().unwrap();
        if position(&users, &id).is_some() {
            return Err(AppError::DuplicateKey(format!(
                "E11000 duplicate key error collection: test.users index: id_1 dup key: {{ id: \"{}\" }}",
                id
            )));
        }
        users.push(record);
        Ok(())
    }

    async fn update(&self, json: &str) -> Result<(), AppError> {
        let record = parse_record(json)?;
        let not_found = || AppError::NotFound(UPDATE_NOT_FOUND.to_string());
        let id = record_id(&record).ok_or_else(not_found)?.to_owned();

        let mut users = self.users.lock().unwrap();
        let index = position(&users, &id).ok_or_else(not_found)?;
        users[index] = record;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        let index = position(&users, id)
            .ok_or_else(|| AppError::NotFound(REMOVE_NOT_FOUND.to_string()))?;
        users.remove(index);
        Ok(())
    }
}

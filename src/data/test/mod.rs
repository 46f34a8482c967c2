mod announcement;
mod user;

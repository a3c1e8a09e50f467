//! Direct SQL helpers that bypass the repository under test.

use postgres::{Client, NoTls};

/// Create `name` on the cluster reachable through `admin_url`.
pub fn create_database(admin_url: &str, name: &str) -> Result<(), postgres::Error> {
    let mut client = Client::connect(admin_url, NoTls)?;
    client.batch_execute(&format!("DROP DATABASE IF EXISTS \"{name}\""))?;
    client.batch_execute(&format!("CREATE DATABASE \"{name}\""))?;
    Ok(())
}

/// Empty the `users` table.
pub fn truncate_users(url: &str) -> Result<(), postgres::Error> {
    let mut client = Client::connect(url, NoTls)?;
    client.batch_execute("TRUNCATE TABLE users")
}

/// Drop the `users` table so subsequent queries fail.
pub fn drop_users_table(url: &str) -> Result<(), postgres::Error> {
    let mut client = Client::connect(url, NoTls)?;
    client.batch_execute("DROP TABLE IF EXISTS users CASCADE")
}

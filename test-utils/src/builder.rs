use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Hotel, Room};
///
/// let test = TestBuilder::new()
///     .with_table(Hotel)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Chain multiple calls to add multiple
    /// tables; tables with foreign keys should be added after the tables
    /// they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for hotel/room browsing and search.
    ///
    /// Adds the following tables in dependency order:
    /// - User
    /// - Province
    /// - Ward
    /// - Hotel
    /// - HotelImage
    /// - Room
    /// - RoomImage
    /// - Feature
    pub fn with_hotel_tables(self) -> Self {
        self.with_table(User)
            .with_table(Province)
            .with_table(Ward)
            .with_table(Hotel)
            .with_table(HotelImage)
            .with_table(Room)
            .with_table(RoomImage)
            .with_table(Feature)
    }

    /// Adds all tables required for booking operations.
    ///
    /// Equivalent to `with_hotel_tables()` followed by PaymentMethod and
    /// Booking.
    pub fn with_booking_tables(self) -> Self {
        self.with_hotel_tables()
            .with_table(PaymentMethod)
            .with_table(Booking)
    }

    /// Adds all tables required for review operations.
    pub fn with_review_tables(self) -> Self {
        self.with_hotel_tables().with_table(Review)
    }

    /// Adds the tables required for authentication flows.
    ///
    /// Adds User and PasswordResetToken.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(PasswordResetToken)
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates every table
    /// added via `with_table` and the convenience methods.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! The demo-data run: users, products, pickup locations, then two years of orders.

use crate::clients::{ActorClient, OrderClient, PickupLocationClient, ProductClient, UserClient};
use crate::config::GeneratorConfig;
use crate::demo_data::error::GeneratorError;
use crate::demo_data::factory::{self, ADMIN, BAKER, BARISTA, DELETABLE_USERS};
use crate::demo_data::history::OrderActors;
use crate::demo_data::random::RandomStream;
use crate::demo_data::timeline::OrderTimeline;
use crate::lifecycle::StoreSystem;
use crate::model::{OrderId, PickupLocation, Product};
use crate::password::{PasswordHasher, Sha256PasswordHasher};
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Result of [`DataGenerator::load_data`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The user store already had content, so nothing was written.
    Skipped,
    Generated(GenerationSummary),
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub today: NaiveDate,
    pub users: usize,
    pub products: usize,
    pub pickup_locations: usize,
    pub orders: usize,
    /// The small order due this morning, always written first.
    pub fixture_order: OrderId,
}

/// Populates empty stores with a reproducible dataset.
///
/// Runs strictly sequentially: every entity is written before the next draw is made,
/// so the stored data depends only on the seed and `today`.
pub struct DataGenerator {
    users: UserClient,
    products: ProductClient,
    pickup_locations: PickupLocationClient,
    orders: OrderClient,
    hasher: Box<dyn PasswordHasher>,
    config: GeneratorConfig,
}

impl DataGenerator {
    pub fn new(
        users: UserClient,
        products: ProductClient,
        pickup_locations: PickupLocationClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            users,
            products,
            pickup_locations,
            orders,
            hasher: Box::new(Sha256PasswordHasher),
            config: GeneratorConfig::default(),
        }
    }

    /// Writes through the stores of a running [`StoreSystem`].
    pub fn for_system(system: &StoreSystem) -> Self {
        Self::new(
            system.user_client.clone(),
            system.product_client.clone(),
            system.pickup_location_client.clone(),
            system.order_client.clone(),
        )
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_hasher(mut self, hasher: impl PasswordHasher + 'static) -> Self {
        self.hasher = Box::new(hasher);
        self
    }

    /// Generates the dataset unless the user store already holds anything.
    ///
    /// The first failed write aborts the run. Entities written before it stay stored.
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub async fn load_data(&self) -> Result<GenerationOutcome, GeneratorError> {
        if self.users.count().await? != 0 {
            info!("Using existing database");
            return Ok(GenerationOutcome::Skipped);
        }

        let today = self.config.today();
        info!(%today, "Generating demo data");
        let mut random = RandomStream::seeded(self.config.seed);

        info!("... generating users");
        let baker = self.users.save(BAKER.draft(self.hasher.as_ref())).await?;
        let barista = self.users.save(BARISTA.draft(self.hasher.as_ref())).await?;
        self.users.save(ADMIN.draft(self.hasher.as_ref())).await?;
        for account in &DELETABLE_USERS {
            self.users.save(account.draft(self.hasher.as_ref())).await?;
        }

        info!("... generating products");
        let products = self
            .create_products(self.config.order_product_count, &mut random)
            .await?;
        // Never referenced by an order, so they can be deleted in a demo.
        let deletable = self
            .create_products(self.config.deletable_product_count, &mut random)
            .await?;

        info!("... generating pickup locations");
        let pickup_locations = self.create_pickup_locations().await?;

        info!("... generating orders");
        let actors = OrderActors {
            creator: barista.id,
            fulfiller: baker.id,
        };
        let timeline = OrderTimeline::new(
            &products,
            &pickup_locations,
            actors,
            today,
            self.config.years_to_include,
        )?;
        let (fixture_order, orders) = self.create_orders(&timeline, &mut random).await?;

        let summary = GenerationSummary {
            today,
            users: 3 + DELETABLE_USERS.len(),
            products: products.len() + deletable.len(),
            pickup_locations: pickup_locations.len(),
            orders,
            fixture_order,
        };
        info!(
            users = summary.users,
            products = summary.products,
            pickup_locations = summary.pickup_locations,
            orders = summary.orders,
            "Generated demo data"
        );
        Ok(GenerationOutcome::Generated(summary))
    }

    async fn create_products(
        &self,
        count: usize,
        random: &mut RandomStream,
    ) -> Result<Vec<Product>, GeneratorError> {
        let mut products = Vec::with_capacity(count);
        for _ in 0..count {
            products.push(self.products.save(factory::product(random)).await?);
        }
        Ok(products)
    }

    async fn create_pickup_locations(&self) -> Result<Vec<PickupLocation>, GeneratorError> {
        let mut locations = Vec::new();
        for draft in factory::pickup_locations() {
            locations.push(self.pickup_locations.save(draft).await?);
        }
        Ok(locations)
    }

    // Each order is stored as soon as it is drafted.
    async fn create_orders(
        &self,
        timeline: &OrderTimeline<'_>,
        random: &mut RandomStream,
    ) -> Result<(OrderId, usize), GeneratorError> {
        let fixture = self.orders.save(timeline.fixture_order(random)?).await?;
        let mut written = 1;

        let window = timeline.window()?;
        for day in window.days() {
            let count = timeline.orders_for_day(day, random);
            for _ in 0..count {
                self.orders.save(timeline.create_order(day, random)?).await?;
            }
            written += count;
            debug!(%day, count, "Orders written");
        }

        info!(orders = written, "... generated orders");
        Ok((fixture.id, written))
    }
}

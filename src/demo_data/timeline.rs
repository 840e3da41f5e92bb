//! Orders laid out day by day over the generation window.
//!
//! The window runs from January 1st of `years_to_include` years ago up to, but not
//! including, one month after today. The number of orders per day grows slowly with
//! the month so the dataset shows a trend.

use crate::demo_data::error::GeneratorError;
use crate::demo_data::factory;
use crate::demo_data::history::{reconstruct_history, OrderActors};
use crate::demo_data::random::RandomStream;
use crate::demo_data::selector::select;
use crate::demo_data::state::resolve_state;
use crate::model::{
    ItemComment, OrderCreate, OrderItem, OrderState, PickupLocation, Product, ProductId,
};
use crate::order_actor::{MAX_ITEMS, MAX_QUANTITY};
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

/// Growth of the daily order count per month of the window.
pub const MONTHLY_GROWTH: f64 = 0.03;

/// Pickup times on offer: 08:00, 12:00 and 16:00.
pub const DUE_HOURS: [u32; 3] = [8, 12, 16];

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day < end)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }
}

/// Everything needed to draft orders for any day of the window.
pub struct OrderTimeline<'a> {
    products: &'a [Product],
    pickup_locations: &'a [PickupLocation],
    actors: OrderActors,
    today: NaiveDate,
    years_to_include: i32,
}

impl<'a> OrderTimeline<'a> {
    /// `products` are the ones orders may reference, in creation order.
    pub fn new(
        products: &'a [Product],
        pickup_locations: &'a [PickupLocation],
        actors: OrderActors,
        today: NaiveDate,
        years_to_include: i32,
    ) -> Result<Self, GeneratorError> {
        if products.is_empty() {
            return Err(GeneratorError::EmptyCatalog("products"));
        }
        if pickup_locations.is_empty() {
            return Err(GeneratorError::EmptyCatalog("pickup locations"));
        }
        Ok(Self {
            products,
            pickup_locations,
            actors,
            today,
            years_to_include,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window(&self) -> Result<Window, GeneratorError> {
        let first_year = self.today.year() - self.years_to_include;
        let start = NaiveDate::from_ymd_opt(first_year, 1, 1).ok_or_else(|| {
            GeneratorError::DateOutOfRange(format!("January 1st of {}", first_year))
        })?;
        let end = self.today.checked_add_months(Months::new(1)).ok_or_else(|| {
            GeneratorError::DateOutOfRange(format!("one month after {}", self.today))
        })?;
        Ok(Window { start, end })
    }

    /// How many orders fall due on `day`. Consumes one integer draw.
    pub fn orders_for_day(&self, day: NaiveDate, random: &mut RandomStream) -> usize {
        let relative_year = day.year() - self.today.year() + self.years_to_include;
        let relative_month = relative_year * 12 + day.month() as i32;
        let multiplier = 1.0 + MONTHLY_GROWTH * f64::from(relative_month);
        // The trend is added to the draw, not multiplied into it.
        (f64::from(random.next_int(10)) + multiplier) as usize
    }

    /// Drafts one order due on `due_date`.
    ///
    /// Draws in a fixed order: due time, customer, pickup location, state, items
    /// (product, quantity and comment per line), history.
    pub fn create_order(
        &self,
        due_date: NaiveDate,
        random: &mut RandomStream,
    ) -> Result<OrderCreate, GeneratorError> {
        let due_time = due_time(*random.pick(&DUE_HOURS));
        let customer = factory::customer(random);
        let pickup_location = select(self.pickup_locations, random)
            .ok_or(GeneratorError::EmptyCatalog("pickup locations"))?
            .id;
        let state = resolve_state(due_date, self.today, random);
        let items = self.items(random)?;
        let history = reconstruct_history(state, due_date, due_time, self.actors, random)?;

        Ok(OrderCreate {
            created_by: self.actors.creator,
            customer,
            pickup_location,
            due_date,
            due_time,
            state,
            items,
            history,
        })
    }

    /// A small `New` order due today at 08:00, with one item and one history event.
    pub fn fixture_order(&self, random: &mut RandomStream) -> Result<OrderCreate, GeneratorError> {
        let mut order = self.create_order(self.today, random)?;
        order.due_time = due_time(8);
        order.items.truncate(1);
        order.state = OrderState::New;
        order.history.truncate(1);
        Ok(order)
    }

    fn items(&self, random: &mut RandomStream) -> Result<Vec<OrderItem>, GeneratorError> {
        let count = (random.next_int(MAX_ITEMS as u32) as usize + 1).min(self.products.len());
        let mut items: Vec<OrderItem> = Vec::with_capacity(count);
        for _ in 0..count {
            let product = self.distinct_product(&items, random)?;
            let quantity = random.next_int(MAX_QUANTITY) + 1;
            let comment = if random.next_int(5) == 0 {
                Some(if random.next_bool() {
                    ItemComment::LactoseFree
                } else {
                    ItemComment::GlutenFree
                })
            } else {
                None
            };
            items.push(OrderItem {
                product,
                quantity,
                comment,
            });
        }
        Ok(items)
    }

    // Redraws until the product is not yet on the order.
    fn distinct_product(
        &self,
        taken: &[OrderItem],
        random: &mut RandomStream,
    ) -> Result<ProductId, GeneratorError> {
        loop {
            let candidate = select(self.products, random)
                .ok_or(GeneratorError::EmptyCatalog("products"))?
                .id;
            if taken.iter().all(|item| item.product != candidate) {
                return Ok(candidate);
            }
        }
    }
}

fn due_time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use chrono::Utc;
use tokio::sync::Barrier;

use cafehop_domain::role::CustomerRole;
use cafehop_web::domain::repository::{
    CafeRepository, CartRepository, CustomerRepository, MenuRepository, OrderMailer,
};
use cafehop_web::domain::types::{
    Cafe, CartLine, Customer, MenuItem, NewCafe, NewCustomer, NewMenuItem, OrderEmail,
};
use cafehop_web::error::WebServiceError;

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_new_cafe(name: &str, location: &str) -> NewCafe {
    NewCafe {
        name: name.to_owned(),
        map_url: "https://maps.example.com/cafe".to_owned(),
        img_url: "https://img.example.com/cafe.png".to_owned(),
        location: location.to_owned(),
        has_sockets: true,
        has_toilet: false,
        has_wifi: true,
        can_take_calls: false,
        seats: Some("20-30".to_owned()),
        coffee_price: Some("£2.80".to_owned()),
    }
}

pub fn test_cafe(id: i32, name: &str, location: &str) -> Cafe {
    let new = test_new_cafe(name, location);
    Cafe {
        id,
        name: new.name,
        map_url: new.map_url,
        img_url: new.img_url,
        location: new.location,
        has_sockets: new.has_sockets,
        has_toilet: new.has_toilet,
        has_wifi: new.has_wifi,
        can_take_calls: new.can_take_calls,
        seats: new.seats,
        coffee_price: new.coffee_price,
    }
}

pub fn test_item(id: i32, name: &str, price: i32) -> MenuItem {
    MenuItem {
        id,
        name: name.to_owned(),
        img_url: format!("https://img.example.com/item-{id}.png"),
        price,
    }
}

pub fn test_customer(id: i32, email: &str) -> Customer {
    Customer {
        id,
        name: format!("customer-{id}"),
        email: email.to_owned(),
        password_hash: String::new(),
        address: "1 Rue de Rivoli, Paris".to_owned(),
        role: CustomerRole::Customer,
        created_at: Utc::now(),
    }
}

// ── MockCafeRepo ─────────────────────────────────────────────────────────────

pub struct MockCafeRepo {
    pub cafes: Arc<Mutex<Vec<Cafe>>>,
}

impl MockCafeRepo {
    pub fn new(cafes: Vec<Cafe>) -> Self {
        Self {
            cafes: Arc::new(Mutex::new(cafes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the internal cafe list for post-execution inspection.
    pub fn cafes_handle(&self) -> Arc<Mutex<Vec<Cafe>>> {
        Arc::clone(&self.cafes)
    }
}

impl CafeRepository for MockCafeRepo {
    async fn list(&self) -> Result<Vec<Cafe>, WebServiceError> {
        Ok(self.cafes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Cafe>, WebServiceError> {
        Ok(self.cafes.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Cafe>, WebServiceError> {
        Ok(self
            .cafes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, WebServiceError> {
        Ok(self
            .cafes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.location == location)
            .cloned()
            .collect())
    }

    async fn random(&self) -> Result<Option<Cafe>, WebServiceError> {
        Ok(self.cafes.lock().unwrap().first().cloned())
    }

    async fn create(&self, cafe: &NewCafe) -> Result<Cafe, WebServiceError> {
        let mut cafes = self.cafes.lock().unwrap();
        if cafes.iter().any(|c| c.name == cafe.name) {
            return Err(anyhow!("duplicate key value violates unique constraint").into());
        }
        let id = cafes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Cafe {
            id,
            name: cafe.name.clone(),
            map_url: cafe.map_url.clone(),
            img_url: cafe.img_url.clone(),
            location: cafe.location.clone(),
            has_sockets: cafe.has_sockets,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            can_take_calls: cafe.can_take_calls,
            seats: cafe.seats.clone(),
            coffee_price: cafe.coffee_price.clone(),
        };
        cafes.push(created.clone());
        Ok(created)
    }

    async fn update_coffee_price(&self, id: i32, price: &str) -> Result<bool, WebServiceError> {
        let mut cafes = self.cafes.lock().unwrap();
        match cafes.iter_mut().find(|c| c.id == id) {
            Some(cafe) => {
                cafe.coffee_price = Some(price.to_owned());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockMenuRepo ─────────────────────────────────────────────────────────────

/// Catalog plus `(link_id, cafe_id, item_id)` link rows.
pub struct MockMenuRepo {
    pub items: Arc<Mutex<Vec<MenuItem>>>,
    pub links: Arc<Mutex<Vec<(i32, i32, i32)>>>,
}

impl MockMenuRepo {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            links: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn with_links(self, links: &[(i32, i32)]) -> Self {
        {
            let mut rows = self.links.lock().unwrap();
            for &(cafe_id, item_id) in links {
                let id = rows.len() as i32 + 1;
                rows.push((id, cafe_id, item_id));
            }
        }
        self
    }

    pub fn items_handle(&self) -> Arc<Mutex<Vec<MenuItem>>> {
        Arc::clone(&self.items)
    }

    pub fn links_handle(&self) -> Arc<Mutex<Vec<(i32, i32, i32)>>> {
        Arc::clone(&self.links)
    }
}

impl MenuRepository for MockMenuRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, WebServiceError> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, WebServiceError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.name == name)
            .cloned())
    }

    /// Enforces the unique name constraint like the database does.
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, WebServiceError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.name == item.name) {
            return Err(anyhow!("duplicate key value violates unique constraint").into());
        }
        let id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let created = MenuItem {
            id,
            name: item.name.clone(),
            img_url: item.img_url.clone(),
            price: item.price,
        };
        items.push(created.clone());
        Ok(created)
    }

    async fn list_for_cafe(&self, cafe_id: i32) -> Result<Vec<MenuItem>, WebServiceError> {
        let items = self.items.lock().unwrap();
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c, _)| *c == cafe_id)
            .filter_map(|(_, _, item_id)| items.iter().find(|i| i.id == *item_id).cloned())
            .collect())
    }

    async fn is_linked(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .any(|(_, c, i)| *c == cafe_id && *i == item_id))
    }

    async fn link(&self, cafe_id: i32, item_id: i32) -> Result<(), WebServiceError> {
        let mut links = self.links.lock().unwrap();
        let id = links.iter().map(|(id, _, _)| *id).max().unwrap_or(0) + 1;
        links.push((id, cafe_id, item_id));
        Ok(())
    }

    async fn unlink(&self, cafe_id: i32, item_id: i32) -> Result<bool, WebServiceError> {
        let mut links = self.links.lock().unwrap();
        match links
            .iter()
            .position(|(_, c, i)| *c == cafe_id && *i == item_id)
        {
            Some(pos) => {
                links.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ── MockCustomerRepo ─────────────────────────────────────────────────────────

/// Customer store. `create` assigns the role while holding the lock, mirroring
/// the table lock taken by the database repository.
#[derive(Clone)]
pub struct MockCustomerRepo {
    pub customers: Arc<Mutex<Vec<Customer>>>,
    /// When set, `find_by_email` waits here after its lookup so concurrent
    /// registrations all pass the email check before any of them inserts.
    pub lookup_barrier: Option<Arc<Barrier>>,
}

impl MockCustomerRepo {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(Mutex::new(customers)),
            lookup_barrier: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Empty store whose email lookups rendezvous across `parties` callers.
    pub fn interleaved(parties: usize) -> Self {
        Self {
            lookup_barrier: Some(Arc::new(Barrier::new(parties))),
            ..Self::empty()
        }
    }

    pub fn customers_handle(&self) -> Arc<Mutex<Vec<Customer>>> {
        Arc::clone(&self.customers)
    }
}

impl CustomerRepository for MockCustomerRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, WebServiceError> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, WebServiceError> {
        let found = self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email)
            .cloned();
        if let Some(barrier) = &self.lookup_barrier {
            barrier.wait().await;
        }
        Ok(found)
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, WebServiceError> {
        let mut customers = self.customers.lock().unwrap();
        let id = customers.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Customer {
            id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            password_hash: customer.password_hash.clone(),
            address: customer.address.clone(),
            role: CustomerRole::for_new_account(customers.len() as u64),
            created_at: Utc::now(),
        };
        customers.push(created.clone());
        Ok(created)
    }
}

// ── MockCartRepo ─────────────────────────────────────────────────────────────

/// Cart rows as `(item_id, customer_id, menu_item_id)`, joined against `catalog`.
pub struct MockCartRepo {
    pub catalog: Vec<MenuItem>,
    pub rows: Arc<Mutex<Vec<(i32, i32, i32)>>>,
    pub fail_clear: bool,
}

impl MockCartRepo {
    pub fn new(catalog: Vec<MenuItem>) -> Self {
        Self {
            catalog,
            rows: Arc::new(Mutex::new(vec![])),
            fail_clear: false,
        }
    }

    pub fn failing_clear(mut self) -> Self {
        self.fail_clear = true;
        self
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<(i32, i32, i32)>>> {
        Arc::clone(&self.rows)
    }
}

impl CartRepository for MockCartRepo {
    async fn add(&self, customer_id: i32, menu_item_id: i32) -> Result<(), WebServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|(id, _, _)| *id).max().unwrap_or(0) + 1;
        rows.push((id, customer_id, menu_item_id));
        Ok(())
    }

    async fn list(&self, customer_id: i32) -> Result<Vec<CartLine>, WebServiceError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c, _)| *c == customer_id)
            .filter_map(|(item_id, _, menu_item_id)| {
                self.catalog
                    .iter()
                    .find(|i| i.id == *menu_item_id)
                    .map(|item| CartLine {
                        item_id: *item_id,
                        menu_item: item.clone(),
                    })
            })
            .collect())
    }

    async fn clear(&self, customer_id: i32) -> Result<u64, WebServiceError> {
        if self.fail_clear {
            return Err(anyhow!("connection reset").into());
        }
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(_, c, _)| *c != customer_id);
        Ok((before - rows.len()) as u64)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<OrderEmail>>>,
    pub fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<OrderEmail>>> {
        Arc::clone(&self.sent)
    }
}

impl OrderMailer for MockMailer {
    async fn send(&self, email: &OrderEmail) -> Result<(), WebServiceError> {
        if self.fail {
            return Err(anyhow!("mail transport unavailable").into());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

//! Talk to a real listening server over HTTP.
//!
//! # Design
//! Starts the service on a random port in a background thread, then drives
//! it with ureq. Status-as-error is disabled so 4xx responses come back as
//! data and their envelopes can be checked.

use todo_server::{ErrorBody, TodoItemBody};

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn item(title: &str, done: bool) -> TodoItemBody {
    TodoItemBody {
        title: title.to_string(),
        done,
    }
}

#[test]
fn list_add_update_over_http() {
    let base = start_server();
    let agent = agent();

    // Step 1: list the seed.
    let mut resp = agent.get(&format!("{base}/")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let todos: Vec<TodoItemBody> = resp.body_mut().read_json().unwrap();
    assert_eq!(todos.len(), 3);

    // Step 2: add.
    let mut resp = agent
        .post(&format!("{base}/"))
        .send_json(item("Buy milk", false))
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let todos: Vec<TodoItemBody> = resp.body_mut().read_json().unwrap();
    assert_eq!(todos.len(), 4);
    assert_eq!(todos[3], item("Buy milk", false));

    // Step 3: update the new item; state persists across requests.
    let mut resp = agent
        .put(&format!("{base}/Buy%20milk"))
        .send_json(item("Buy oat milk", true))
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let todos: Vec<TodoItemBody> = resp.body_mut().read_json().unwrap();
    assert_eq!(todos[3], item("Buy oat milk", true));

    // Step 4: filter sees the change.
    let mut resp = agent.get(&format!("{base}/?done=true")).call().unwrap();
    let todos: Vec<TodoItemBody> = resp.body_mut().read_json().unwrap();
    assert_eq!(
        todos,
        vec![item("Start writing TODO list", true), item("Buy oat milk", true)]
    );

    // Step 5: miss.
    let mut resp = agent
        .put(&format!("{base}/Nonexistent"))
        .send_json(item("Anything", true))
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
    let err: ErrorBody = resp.body_mut().read_json().unwrap();
    assert_eq!(err.status_code, 404);
    assert!(err.detail.contains("Nonexistent"));
}

//! # Library Inventory Manager
//!
//! Interactive menu shell over [`tally_core::inventory::Inventory`]. Every
//! mutation is persisted immediately, so the JSON catalog on disk always
//! reflects the last completed operation. Store errors print as one-line
//! messages and the loop keeps running.

use tally_cli::prompt::{read_nonempty, read_trimmed};
use tally_cli::init_logging;
use tally_core::catalog::Book;
use tally_core::file_io::DEFAULT_CATALOG_PATH;
use tally_core::inventory::Inventory;

const MENU: &str = "
1. Add Book
2. Issue Book
3. Return Book
4. View All Books
5. Search by Title
6. Search by ISBN
7. Exit
";

fn print_header() {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("{:^60}", "Library Inventory Manager");
    println!("{}", rule);
}

fn main() {
    init_logging();
    print_header();

    let mut inv = match Inventory::open(DEFAULT_CATALOG_PATH) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    loop {
        println!("{}", MENU);
        let Some(choice) = read_trimmed("Enter choice (1-7): ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_book(&mut inv),
            "2" => issue_book(&mut inv),
            "3" => return_book(&mut inv),
            "4" => view_all(&inv),
            "5" => search_by_title(&inv),
            "6" => search_by_isbn(&inv),
            "7" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice."),
        }
    }
}

fn add_book(inv: &mut Inventory) {
    let Some(title) = read_nonempty("Title: ") else { return };
    let Some(author) = read_nonempty("Author: ") else { return };
    let Some(isbn) = read_nonempty("ISBN: ") else { return };

    let result = inv
        .add(Book::new(title, author, isbn))
        .and_then(|_| inv.save());
    match result {
        Ok(()) => println!("Book added."),
        Err(e) => println!("Error: {}", e),
    }
}

fn issue_book(inv: &mut Inventory) {
    let Some(isbn) = read_nonempty("ISBN to issue: ") else { return };
    match inv.issue_by_isbn(&isbn) {
        Ok(()) => println!("Book issued."),
        Err(e) => println!("Error: {}", e),
    }
}

fn return_book(inv: &mut Inventory) {
    let Some(isbn) = read_nonempty("ISBN to return: ") else { return };
    match inv.return_by_isbn(&isbn) {
        Ok(()) => println!("Book returned."),
        Err(e) => println!("Error: {}", e),
    }
}

fn view_all(inv: &Inventory) {
    let lines = inv.list_all();
    if lines.is_empty() {
        println!("No books in inventory.");
    } else {
        for line in lines {
            println!(" - {}", line);
        }
    }
}

fn search_by_title(inv: &Inventory) {
    let Some(query) = read_nonempty("Search title: ") else { return };
    let results = inv.search_by_title(&query);
    if results.is_empty() {
        println!("No books found.");
    } else {
        for book in results {
            println!(" - {}", book);
        }
    }
}

fn search_by_isbn(inv: &Inventory) {
    let Some(isbn) = read_nonempty("Search ISBN: ") else { return };
    match inv.find_by_isbn(&isbn) {
        Some(book) => println!("{}", book),
        None => println!("Book not found."),
    }
}

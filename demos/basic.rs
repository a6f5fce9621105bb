use chainlist::lists::LinkedList;

fn main() {
    let mut list = LinkedList::<u32>::new();
    list.append(10);
    list.append(20);
    list.prepend(5);
    list.insert_at(15, 2);

    // (5) -> (10) -> (15) -> (20) -> null
    println!("{}", list);
    println!("{}", list.size());
    // Some(Node { val: 15, next: Some(Node { val: 20, next: None }) })
    println!("{:?}", list.at(2));
}

fn main() {
    teco::term::main()
}
